//! Rendering of vertex pairs to an output sink.
//!
//! Despite the "path" vocabulary inherited by this surface, no pathfinding
//! exists: `display` echoes the requested pair and `display_all` lists every
//! ordered pairing per vertex. The limitation is preserved deliberately.

use std::io::{self, Write};

use crate::graph::Graph;

/// Line emitted when a requested pair fails the range check.
pub const DISPLAY_ERROR: &str = "DISPLAY ERROR: No path exists";

impl Graph {
    /// Writes the requested pair (1-based identifiers), or the
    /// [`DISPLAY_ERROR`] line when either identifier is zero or out of
    /// range.
    ///
    /// # Errors
    /// Propagates any failure from the underlying writer.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::GraphBuilder;
    ///
    /// let graph = GraphBuilder::new()
    ///     .with_payloads(["a", "b"])
    ///     .build()
    ///     .expect("two vertices fit the default capacity");
    /// let mut out = Vec::new();
    /// graph.display(1, 2, &mut out).expect("writing to a Vec cannot fail");
    /// assert_eq!(String::from_utf8(out).expect("utf-8"), "1\t2\n");
    /// ```
    pub fn display(
        &self,
        source: usize,
        destination: usize,
        writer: &mut impl Write,
    ) -> io::Result<()> {
        let in_range = source
            .checked_sub(1)
            .zip(destination.checked_sub(1))
            .is_some_and(|(from, to)| self.are_in_range(from, to));
        if in_range {
            writeln!(writer, "{source}\t{destination}")
        } else {
            writeln!(writer, "{DISPLAY_ERROR}")
        }
    }

    /// Writes a header, then for every vertex its payload followed by the
    /// pairing with every *other* vertex identifier.
    ///
    /// # Errors
    /// Propagates any failure from the underlying writer.
    pub fn display_all(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "Description\tFrom\tTo")?;
        for source in 1..=self.len() {
            if let Some(payload) = self.payload(source) {
                writeln!(writer, "{payload}")?;
            }
            for destination in 1..=self.len() {
                if source != destination {
                    writeln!(writer, "\t{source}\t{destination}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::GraphBuilder;

    use super::DISPLAY_ERROR;

    fn rendered(out: Vec<u8>) -> String {
        String::from_utf8(out).expect("display output must be utf-8")
    }

    #[test]
    fn display_echoes_the_pair() {
        let graph = GraphBuilder::new()
            .with_payloads(["a", "b", "c"])
            .build()
            .expect("three vertices fit the default capacity");
        let mut out = Vec::new();
        graph.display(2, 3, &mut out).expect("write to Vec");
        assert_eq!(rendered(out), "2\t3\n");
    }

    #[rstest]
    #[case::zero_source(0, 1)]
    #[case::zero_destination(1, 0)]
    #[case::past_size(1, 4)]
    fn display_reports_out_of_range(#[case] source: usize, #[case] destination: usize) {
        let graph = GraphBuilder::new()
            .with_payloads(["a", "b", "c"])
            .build()
            .expect("three vertices fit the default capacity");
        let mut out = Vec::new();
        graph
            .display(source, destination, &mut out)
            .expect("write to Vec");
        assert_eq!(rendered(out), format!("{DISPLAY_ERROR}\n"));
    }

    #[test]
    fn display_all_lists_every_other_vertex() {
        let graph = GraphBuilder::new()
            .with_payloads(["north", "south"])
            .build()
            .expect("two vertices fit the default capacity");
        let mut out = Vec::new();
        graph.display_all(&mut out).expect("write to Vec");
        assert_eq!(
            rendered(out),
            "Description\tFrom\tTo\nnorth\n\t1\t2\nsouth\n\t2\t1\n"
        );
    }
}
