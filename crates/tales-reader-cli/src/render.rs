//! Plain-text rendering of parsed issues for the terminal.

use std::io::{self, Write};

use tales_reader_engine::{
    ContentBlock, Document, IssueSummary, OutlineGroup, Paragraph, Section, Segment,
};

pub fn write_outline(out: &mut impl Write, doc: &Document) -> io::Result<()> {
    for entry in doc.outline() {
        match entry.group {
            Some(OutlineGroup::Stories) => writeln!(out, "Stories:")?,
            Some(OutlineGroup::Features) => writeln!(out, "Features:")?,
            None => {}
        }
        write!(out, "{:>3}  {:<9}  {}", entry.index, entry.kind, entry.title)?;
        if let Some(author) = entry.author {
            write!(out, "  ({author})")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes one section followed by its navigation footer.
///
/// `index` must already be clamped to the document.
pub fn write_section(out: &mut impl Write, doc: &Document, index: usize) -> io::Result<()> {
    let Some(section) = doc.get(index) else {
        return writeln!(out, "(this issue has no sections)");
    };

    writeln!(out, "[{}/{}] {}", index + 1, doc.len(), section.kind())?;
    writeln!(out, "{}", section.title())?;
    if let Some(author) = section.author() {
        writeln!(out, "by {author}")?;
    }

    for block in section.blocks() {
        writeln!(out)?;
        match block {
            ContentBlock::Paragraph(p) => writeln!(out, "{}", emphasized_text(p))?,
            ContentBlock::SubsectionHeading(label) => writeln!(out, "    {label}")?,
            ContentBlock::Divider => writeln!(out, "* * *")?,
            ContentBlock::EndMarker => writeln!(out, "[THE END]")?,
        }
    }

    let (previous, next) = doc.neighbors(index);
    writeln!(out)?;
    writeln!(out, "< {}", previous.map(Section::title).unwrap_or("-"))?;
    writeln!(out, "> {}", next.map(Section::title).unwrap_or("-"))?;
    Ok(())
}

/// Footer naming the issues either side of the one shown.
pub fn write_adjacent_issues(
    out: &mut impl Write,
    previous: Option<&IssueSummary>,
    next: Option<&IssueSummary>,
) -> io::Result<()> {
    let label = |issue: Option<&IssueSummary>| match issue {
        Some(i) => format!("#{} {}", i.file.number_padded, i.date),
        None => "-".to_string(),
    };
    writeln!(out)?;
    writeln!(out, "< issue {}", label(previous))?;
    writeln!(out, "> issue {}", label(next))?;
    Ok(())
}

/// Paragraph text with emphasis shown as `*text*`.
fn emphasized_text(p: &Paragraph) -> String {
    p.segments()
        .map(|s| match s {
            Segment::Plain(text) => text.to_string(),
            Segment::Emphasis(text) => format!("*{text}*"),
        })
        .collect()
}
