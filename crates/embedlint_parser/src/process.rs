//! Subprocess plumbing shared by the parser and linter boundaries.

use std::io::{self, ErrorKind, Write};
use std::process::{Child, Output};
use std::thread;

/// Writes `input` to the child's stdin while collecting its output.
///
/// Stdin is fed from a scoped thread, so a child may print any amount
/// before it has read all of its input. A child that exits without reading
/// its input is not an error here; its status and output decide.
pub fn wait_with_input(mut child: Child, input: &[u8]) -> io::Result<Output> {
    let Some(mut stdin) = child.stdin.take() else {
        return child.wait_with_output();
    };

    thread::scope(|scope| {
        let writer = scope.spawn(move || match stdin.write_all(input) {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            result => result,
        });

        let output = child.wait_with_output();
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));

        let output = output?;
        written?;
        Ok(output)
    })
}
