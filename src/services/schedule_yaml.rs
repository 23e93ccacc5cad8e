use std::io::{self, Write};

use clap::ValueEnum;

use crate::domain::schedule::Schedule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

pub fn serialize_schedule<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    format: OutputFormat,
) -> io::Result<()> {
    let contents = match format {
        OutputFormat::Yaml => serde_yaml::to_string(schedule).map_err(io::Error::other)?,
        OutputFormat::Json => serde_json::to_string_pretty(schedule).map_err(io::Error::other)?,
    };
    writer.write_all(contents.as_bytes())
}
