use std::fmt;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event format with every field wrapped in brackets:
/// `[TIMESTAMP] [LEVEL] [FUNCTION] [TARGET: FILE:LINE]: MESSAGE`
pub struct BracketedFormatter;

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let now = chrono::Local::now();
        write!(writer, "[{}] ", now.format("%Y-%m-%dT%H:%M:%S%.3f%:z"))?;
        write!(writer, "[{:5}] ", metadata.level())?;

        // Innermost span if there is one, otherwise the last path segment of the target
        let span_name = ctx
            .event_scope()
            .and_then(|scope| scope.from_root().last().map(|span| span.name()));
        write!(writer, "[{}] ", span_name.unwrap_or_else(|| function_name(metadata)))?;

        write!(writer, "[{}]: ", location(metadata))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn function_name(metadata: &'static Metadata<'static>) -> &'static str {
    metadata.target().rsplit("::").next().unwrap_or("unknown")
}

fn location(metadata: &Metadata<'_>) -> String {
    match (metadata.file(), metadata.line()) {
        (Some(file), Some(line)) => format!("{}: {}:{}", metadata.target(), file, line),
        _ => metadata.target().to_string(),
    }
}
