use croner::{
    Cron,
    parser::{CronParser, Seconds},
};

pub trait CronExt {
    /// Converts string cron pattern to `Cron` instance.
    fn parse_pattern(pattern: impl AsRef<str>) -> anyhow::Result<Cron>;
}

impl CronExt for Cron {
    /// Converts a string cron pattern to `Cron` instance. Patterns must include seconds, and both
    /// day-of-month and day-of-week must match when specified.
    fn parse_pattern(pattern: impl AsRef<str>) -> anyhow::Result<Cron> {
        Ok(CronParser::builder()
            .seconds(Seconds::Required)
            .dom_and_dow(true)
            .build()
            .parse(pattern.as_ref())?)
    }
}
