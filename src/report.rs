//! Rendering of the two-section summary report.
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu};

use crate::{aggregate::FlowCounts, internal_events::ReportWritten};

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Error writing output file: {}: {}", path.display(), source))]
    Create { path: PathBuf, source: io::Error },
    #[snafu(display("Error writing output file: {}", source))]
    Write { source: io::Error },
}

/// Writes the tag section followed by the port/protocol section.
///
/// Both maps are ordered, so tags come out in lexicographic order and pairs
/// ordered by port string, then protocol.
pub fn render<W: Write>(counts: &FlowCounts, mut out: W) -> io::Result<()> {
    writeln!(out, "Tag Counts:")?;
    writeln!(out, "Tag,Count")?;
    for (tag, count) in &counts.tags {
        writeln!(out, "{tag},{count}")?;
    }

    writeln!(out)?;
    writeln!(out, "Port/Protocol Combination Counts:")?;
    writeln!(out, "Port,Protocol,Count")?;
    for (pair, count) in &counts.pairs {
        writeln!(out, "{},{},{count}", pair.port(), pair.protocol())?;
    }

    Ok(())
}

/// Creates or truncates `path` and writes the report to it.
pub fn write_report(counts: FlowCounts, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).context(CreateSnafu { path })?;
    let mut out = BufWriter::new(file);

    render(&counts, &mut out).context(WriteSnafu)?;
    out.flush().context(WriteSnafu)?;

    emit!(ReportWritten {
        path,
        tags: counts.tags.len(),
        pairs: counts.pairs.len(),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::{aggregate::UNTAGGED, enrichment_tables::PortProtocol};

    fn rendered(counts: &FlowCounts) -> String {
        let mut out = Vec::new();
        render(counts, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_counts() -> FlowCounts {
        let mut counts = FlowCounts::default();
        counts.tags.insert("sv_P2".to_string(), 1);
        counts.tags.insert(UNTAGGED.to_string(), 9);
        counts.tags.insert("email".to_string(), 3);
        counts.tags.insert("sv_P1".to_string(), 2);
        counts.pairs.insert(PortProtocol::new("443", "tcp"), 1);
        counts.pairs.insert(PortProtocol::new("25", "tcp"), 3);
        counts.pairs.insert(PortProtocol::new("110", "tcp"), 1);
        counts.pairs.insert(PortProtocol::new("23", "tcp"), 2);
        counts.pairs.insert(PortProtocol::new("25", "999"), 1);
        counts
    }

    #[test]
    fn renders_sorted_sections() {
        assert_eq!(
            rendered(&sample_counts()),
            "Tag Counts:\n\
             Tag,Count\n\
             Untagged,9\n\
             email,3\n\
             sv_P1,2\n\
             sv_P2,1\n\
             \n\
             Port/Protocol Combination Counts:\n\
             Port,Protocol,Count\n\
             110,tcp,1\n\
             23,tcp,2\n\
             25,999,1\n\
             25,tcp,3\n\
             443,tcp,1\n"
        );
    }

    #[test]
    fn renders_headers_for_empty_counts() {
        assert_eq!(
            rendered(&FlowCounts::default()),
            "Tag Counts:\nTag,Count\n\nPort/Protocol Combination Counts:\nPort,Protocol,Count\n"
        );
    }

    #[test]
    fn writes_and_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "stale contents that are longer than the report\n".repeat(20))
            .unwrap();

        write_report(sample_counts(), &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            rendered(&sample_counts())
        );
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.txt");

        let error = write_report(FlowCounts::default(), &path).unwrap_err();

        assert!(matches!(error, ReportError::Create { .. }));
        assert!(error.to_string().starts_with("Error writing output file: "));
    }
}
