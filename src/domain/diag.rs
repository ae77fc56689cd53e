/// Sink for per-node diagnostic output (computed RPC addresses, connector
/// ledger keys, routes). Injected so document generation stays a pure
/// function of its inputs; output here is never part of the document.
pub trait Diagnostics {
    fn log(&self, node: usize, message: &str);
}

/// Writes diagnostics to stderr, one line per entry.
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn log(&self, node: usize, message: &str) {
        eprintln!("{} {}", node, message);
    }
}

/// Discards all diagnostics. The default unless verbose output is requested.
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn log(&self, _node: usize, _message: &str) {}
}
