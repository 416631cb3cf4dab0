//! Tracing setup for the CLI.
//!
//! Installs a compact formatter: a level symbol, then the message and any
//! structured fields. No timestamps - the diagnostics narrate an
//! interactive session, not a server log.

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::registry::LookupSpan;

struct CompactFormatter;

impl<S, N> FormatEvent<S, N> for CompactFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let symbol = match *event.metadata().level() {
            Level::TRACE => "[ ]",
            Level::DEBUG => "[?]",
            Level::INFO => "[+]",
            Level::WARN => "[*]",
            Level::ERROR => "[-]",
        };

        write!(writer, "{symbol} ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber at `level`.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .event_format(CompactFormatter)
        .try_init();
}
