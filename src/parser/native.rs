//! Call sites from native Rust backtraces.
//!
//! `backtrace::Backtrace` frames come innermost first, which is already
//! the newest-first order the enricher expects. Inlined functions give a
//! frame several symbols; each becomes its own call site.

use super::callsite::{CallSite, CallSiteSource};
use crate::utils::error::ExtractionError;
use backtrace::{Backtrace, BacktraceFrame, BacktraceSymbol};
use log::debug;

impl CallSiteSource for Backtrace {
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError> {
        let call_sites: Vec<CallSite> = self.frames().iter().flat_map(frame_call_sites).collect();

        debug!(
            "Collected {} call sites from {} backtrace frames",
            call_sites.len(),
            self.frames().len()
        );

        Ok(call_sites)
    }
}

/// Call sites for one captured frame
///
/// Unresolved frames (captured with `Backtrace::new_unresolved` and never
/// resolved) still count as one call site, with nothing known about it.
fn frame_call_sites(frame: &BacktraceFrame) -> Vec<CallSite> {
    let symbols = frame.symbols();
    if symbols.is_empty() {
        return vec![CallSite::default()];
    }

    symbols.iter().map(symbol_call_site).collect()
}

fn symbol_call_site(symbol: &BacktraceSymbol) -> CallSite {
    CallSite {
        // `SymbolName`'s Display demangles
        function_name: symbol.name().map(|name| name.to_string()),
        file_name: symbol.filename().map(|path| path.display().to_string()),
        line_number: symbol.lineno(),
        column_number: symbol.colno(),
        native: false,
    }
}
