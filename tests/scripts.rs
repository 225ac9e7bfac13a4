use std::{cell::RefCell, fs, io, path::Path, rc::Rc};

use hulk::{Session, diagnostics::CollectingReporter, interpreter::evaluator::core::Context};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn drain(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs a script the way `hulk --file` does and returns everything it would
/// show: printed output, results and diagnostics, in order.
fn transcript(script: &str) -> String {
    let output = SharedBuffer::default();
    let mut session = Session::with_context(Context::with_output(output.clone()),
                                            CollectingReporter::new());
    let mut transcript = String::new();

    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let result = session.run_line_at(line, index + 1);

        transcript.push_str(&output.drain());
        if let Some(value) = result
           && !value.is_nil()
        {
            transcript.push_str(&format!("{value}\n"));
        }
        for message in session.reporter_mut().take() {
            transcript.push_str(&message);
            transcript.push('\n');
        }
    }

    transcript
}

fn check_script(path: &Path) {
    let script = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let expected_path = path.with_extension("out");
    let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                         panic!("Failed to read {expected_path:?}: {e}")
                                                     });

    assert_eq!(transcript(&script), expected, "script {path:?}");
}

#[test]
fn scripts_match_their_transcripts() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path().extension().is_some_and(|ext| ext == "hulk")
                                              })
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
