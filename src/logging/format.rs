//! Event formatters for the text and compact log formats.
//!
//! JSON output uses `tracing_subscriber`'s built-in JSON layer.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Timestamped single-line formatter.
///
/// Output format: `YYYY-MM-DD HH:MM:SS | LEVEL | target | message key=value`
///
/// # Example Output
/// ```text
/// 2026-03-02 09:14:07 | INFO  | bip39_tools::solver | Enumerated final words known=23 candidates=8 language=english
/// 2026-03-02 09:14:07 | DEBUG | bip39_tools::validate | Validated mnemonic words=24 language=english check_range=true result=valid
/// ```
pub struct TextFormatter;

impl<S, N> FormatEvent<S, N> for TextFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} | {} | {} | ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            padded_level(*metadata.level()),
            metadata.target()
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Minimal formatter for interactive use: `[LEVEL] message`.
///
/// # Example Output
/// ```text
/// [WARN] Final word count mismatch expected=8 found=7
/// ```
pub struct CompactFormatter;

impl<S, N> FormatEvent<S, N> for CompactFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "[{}] ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Level name padded to five columns so the separators line up.
fn padded_level(level: Level) -> &'static str {
    match level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO ",
        Level::WARN => "WARN ",
        Level::ERROR => "ERROR",
    }
}
