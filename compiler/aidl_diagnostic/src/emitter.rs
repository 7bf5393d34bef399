//! Plain-text diagnostic output in the `file:line: severity` format build
//! systems and editors already know how to parse.

use std::io::{self, Write};

use crate::{Diagnostic, Label};

/// Writes diagnostics as plain text, one `file:line:` prefixed line per label.
pub struct PlainEmitter<W: Write> {
    writer: W,
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(writer: W) -> Self {
        PlainEmitter { writer }
    }

    /// Emit a single diagnostic.
    pub fn emit(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let primary = diag.labels.iter().find(|l| l.is_primary);
        match primary {
            Some(Label { site, .. }) => writeln!(
                self.writer,
                "{site}: {} [{}]: {}",
                diag.severity, diag.code, diag.message
            )?,
            None => writeln!(
                self.writer,
                "{} [{}]: {}",
                diag.severity, diag.code, diag.message
            )?,
        }

        for label in diag.labels.iter().filter(|l| !l.is_primary) {
            writeln!(self.writer, "{}:     {}", label.site, label.message)?;
        }
        for note in &diag.notes {
            writeln!(self.writer, "    = note: {note}")?;
        }
        for suggestion in &diag.suggestions {
            writeln!(self.writer, "    = help: {suggestion}")?;
        }
        Ok(())
    }

    /// Emit every diagnostic in order.
    pub fn emit_all(&mut self, diags: &[Diagnostic]) -> io::Result<()> {
        for diag in diags {
            self.emit(diag)?;
        }
        self.writer.flush()
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use aidl_ir::DeclSite;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn emits_primary_then_secondary() -> io::Result<()> {
        let diag = crate::redefinition(
            DeclSite::new("Bar.aidl", 3),
            "pkg.Foo",
            "an interface",
            Some(DeclSite::new("Foo.aidl", 10)),
            "a parcelable",
        );

        let mut emitter = PlainEmitter::new(Vec::new());
        emitter.emit_all(&[diag])?;
        let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();

        assert_eq!(
            text,
            "Bar.aidl:3: error [E1003]: attempt to redefine pkg.Foo as an interface\n\
             Foo.aidl:10:     previously defined here as a parcelable\n"
        );
        Ok(())
    }
}
