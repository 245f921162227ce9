// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_issue(stories: usize, paragraphs: usize) -> String {
    let mut content = String::from(
        "==========\nTALES FROM THE FUTURE AND BEYOND\nIssue #12 — December 1953\n==========\nCover Art: \"Red Dawn\" by A. Artist\n==========\nTABLE OF CONTENTS\n\n",
    );
    for story in 1..=stories {
        content.push_str(&format!(
            "  {story}. \"Story Number {story}\" by Author {story} ........ p. {}\n",
            story * 10
        ));
    }

    for story in 1..=stories {
        content.push_str(&format!(
            "==========\nSTORY NUMBER {story}\n\nby Author {story}\n==========\n\n"
        ));
        for paragraph in 0..paragraphs {
            if paragraph > 0 && paragraph % 5 == 0 {
                content.push_str("     II.\n\n");
            }
            content.push_str(
                "The rocket rose on a column of _white_ fire, and the crowd\nbelow fell silent as it climbed into the morning sky.\n\n",
            );
        }
        content.push_str("* * *\n\n[THE END]\n\n");
    }

    content
}
