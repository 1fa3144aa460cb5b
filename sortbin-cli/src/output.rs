use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use sortbin_core::{BinCategory, Classification, Guidance, RuleTable};

#[derive(Serialize)]
struct JsonReport<'a> {
    detected_waste: &'a str,
    recommended_bin: &'a str,
    category: BinCategory,
    detector: &'a str,
    detected_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    guidance: Option<&'a [&'a str]>,
}

/// Plain-text report: two lines, optionally followed by guidance.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    result: &Classification,
    with_guidance: bool,
) -> io::Result<()> {
    writeln!(out, "Detected Waste: {}", result.label)?;
    writeln!(out, "Recommended Bin: {}", result.bin)?;

    if with_guidance {
        writeln!(out)?;
        write_guidance(out, result.bin.guidance())?;
    }
    Ok(())
}

pub(crate) fn write_json<W: Write>(
    out: &mut W,
    result: &Classification,
    with_guidance: bool,
) -> Result<()> {
    let report = JsonReport {
        detected_waste: result.label.as_str(),
        recommended_bin: result.bin.bin_name(),
        category: result.bin,
        detector: &result.detector,
        detected_at: result.detected_at.to_rfc3339(),
        guidance: with_guidance.then_some(result.bin.guidance().steps),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_rules<W: Write>(out: &mut W, rules: &RuleTable) -> io::Result<()> {
    for (key, bin) in rules.entries() {
        writeln!(out, "{key:<16} {bin}")?;
    }
    writeln!(out, "{:<16} {}", "(anything else)", BinCategory::default())
}

pub(crate) fn write_bins<W: Write>(out: &mut W) -> io::Result<()> {
    for category in BinCategory::ALL {
        let guidance = category.guidance();
        writeln!(
            out,
            "{category} [{}]: {}",
            category.slug(),
            guidance.description
        )?;
        writeln!(out, "  e.g. {}", guidance.examples.join(", "))?;
    }
    Ok(())
}

fn write_guidance<W: Write>(out: &mut W, guidance: &Guidance) -> io::Result<()> {
    writeln!(out, "{}: {}", guidance.title, guidance.description)?;
    for (step, text) in guidance.steps.iter().enumerate() {
        writeln!(out, "  {}. {text}", step + 1)?;
    }
    Ok(())
}
