use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::comparison::Comparison;

/// Heat capacity axis range in J/K; curves above it are clipped.
pub const Y_RANGE: (f64, f64) = (0.0, 50.0);

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;

struct Curve<'a> {
    label: &'a str,
    color: &'a str,
    dash: Option<&'a str>,
    values: &'a [f64],
}

struct Frame {
    x_max: f64,
}

impl Frame {
    fn x(&self, value: f64) -> f64 {
        MARGIN_LEFT + value / self.x_max * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn y(&self, value: f64) -> f64 {
        let (lo, hi) = Y_RANGE;
        // keep far off-scale points near the plot so the clip path can trim them
        let clamped = value.clamp(lo - (hi - lo), hi + (hi - lo));
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        HEIGHT - MARGIN_BOTTOM - (clamped - lo) / (hi - lo) * plot_height
    }
}

/// Writes a standalone HTML page with an SVG chart of the four models over
/// `T/DT`, followed by a table of the run parameters.
pub fn generate_html_plot(
    comparison: &Comparison,
    output_path: &Path,
) -> Result<(), std::io::Error> {
    let file = File::create(output_path)?;
    let mut file = BufWriter::new(file);

    let x_values = comparison.normalized_temperatures();
    let frame = Frame {
        x_max: comparison.temperatures.last() / comparison.debye_temperature,
    };
    let curves = [
        Curve {
            label: "Dulong-Petit",
            color: "black",
            dash: None,
            values: &comparison.dulong_petit,
        },
        Curve {
            label: "Einstein",
            color: "red",
            dash: None,
            values: &comparison.einstein,
        },
        Curve {
            label: "Debye",
            color: "blue",
            dash: None,
            values: &comparison.debye,
        },
        Curve {
            label: "Debye, low T",
            color: "blue",
            dash: Some("2,4"),
            values: &comparison.debye_low_temperature,
        },
    ];

    writeln!(file, "<!DOCTYPE html>")?;
    writeln!(file, "<html>")?;
    writeln!(file, "<head>")?;
    writeln!(file, "<meta charset=\"utf-8\">")?;
    writeln!(file, "<title>Heat Capacity Models</title>")?;
    writeln!(file, "<style>")?;
    writeln!(file, "table {{ border-collapse: collapse; }}")?;
    writeln!(
        file,
        "th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}"
    )?;
    writeln!(file, "td:nth-child(2) {{ text-align: right; }}")?;
    writeln!(file, "th {{ background-color: #f2f2f2; }}")?;
    writeln!(file, "svg text {{ font-family: sans-serif; font-size: 13px; }}")?;
    writeln!(file, "</style>")?;
    writeln!(file, "</head>")?;
    writeln!(file, "<body>")?;
    writeln!(file, "<h1>Heat Capacity Models</h1>")?;

    writeln!(
        file,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\">"
    )?;
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    writeln!(
        file,
        "<defs><clipPath id=\"plot-area\"><rect x=\"{MARGIN_LEFT}\" y=\"{MARGIN_TOP}\" width=\"{plot_width}\" height=\"{plot_height}\"/></clipPath></defs>"
    )?;
    writeln!(
        file,
        "<rect x=\"{MARGIN_LEFT}\" y=\"{MARGIN_TOP}\" width=\"{plot_width}\" height=\"{plot_height}\" fill=\"none\" stroke=\"black\"/>"
    )?;

    write_ticks(&mut file, &frame)?;

    for curve in &curves {
        write!(
            file,
            "<polyline clip-path=\"url(#plot-area)\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"",
            curve.color
        )?;
        if let Some(dash) = curve.dash {
            write!(file, " stroke-dasharray=\"{dash}\"")?;
        }
        write!(file, " points=\"")?;
        for (x, y) in x_values.iter().zip(curve.values) {
            write!(file, "{:.2},{:.2} ", frame.x(*x), frame.y(*y))?;
        }
        writeln!(file, "\"/>")?;
    }

    write_legend(&mut file, &curves)?;

    writeln!(
        file,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">T/DT</text>",
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT - 15.0
    )?;
    writeln!(
        file,
        "<text x=\"20\" y=\"{:.1}\" text-anchor=\"middle\" transform=\"rotate(-90 20 {:.1})\">C<tspan baseline-shift=\"sub\" font-size=\"10\">V</tspan> [J/K]</text>",
        MARGIN_TOP + plot_height / 2.0,
        MARGIN_TOP + plot_height / 2.0
    )?;
    writeln!(file, "</svg>")?;

    writeln!(file, "<h2>Parameters</h2>")?;
    writeln!(file, "<table>")?;
    writeln!(file, "<tr><th>Parameter</th><th>Value</th><th>Unit</th></tr>")?;
    writeln!(
        file,
        "<tr><td>Oscillators</td><td>{:.4e}</td><td>-</td></tr>",
        comparison.oscillators
    )?;
    writeln!(
        file,
        "<tr><td>Debye Temperature</td><td>{:.2}</td><td>K</td></tr>",
        comparison.debye_temperature
    )?;
    writeln!(
        file,
        "<tr><td>Einstein Temperature</td><td>{:.2}</td><td>K</td></tr>",
        comparison.einstein_temperature
    )?;
    writeln!(
        file,
        "<tr><td>Temperature Range</td><td>{:.2} to {:.2}</td><td>K</td></tr>",
        comparison.temperatures.first(),
        comparison.temperatures.last()
    )?;
    writeln!(
        file,
        "<tr><td>Points</td><td>{}</td><td>-</td></tr>",
        comparison.temperatures.len()
    )?;
    writeln!(file, "</table>")?;
    writeln!(file, "</body>")?;
    writeln!(file, "</html>")?;

    file.flush()
}

fn write_ticks<W: Write>(file: &mut W, frame: &Frame) -> Result<(), std::io::Error> {
    let bottom = HEIGHT - MARGIN_BOTTOM;

    let x_step = if frame.x_max > 10.0 {
        2.0
    } else if frame.x_max > 2.0 {
        1.0
    } else {
        0.25
    };
    let mut tick = 0.0;
    while tick <= frame.x_max + 1e-9 {
        let x = frame.x(tick);
        writeln!(
            file,
            "<line x1=\"{x:.2}\" y1=\"{bottom}\" x2=\"{x:.2}\" y2=\"{:.1}\" stroke=\"black\"/>",
            bottom + 5.0
        )?;
        writeln!(
            file,
            "<text x=\"{x:.2}\" y=\"{:.1}\" text-anchor=\"middle\">{tick}</text>",
            bottom + 20.0
        )?;
        tick += x_step;
    }

    let (lo, hi) = Y_RANGE;
    let mut value = lo;
    while value <= hi {
        let y = frame.y(value);
        writeln!(
            file,
            "<line x1=\"{:.1}\" y1=\"{y:.2}\" x2=\"{MARGIN_LEFT}\" y2=\"{y:.2}\" stroke=\"black\"/>",
            MARGIN_LEFT - 5.0
        )?;
        writeln!(
            file,
            "<text x=\"{:.1}\" y=\"{:.2}\" text-anchor=\"end\">{value}</text>",
            MARGIN_LEFT - 8.0,
            y + 4.0
        )?;
        value += 10.0;
    }
    Ok(())
}

// lower right corner, like matplotlib's `loc=4`
fn write_legend<W: Write>(file: &mut W, curves: &[Curve]) -> Result<(), std::io::Error> {
    let row_height = 20.0;
    let box_width = 140.0;
    let box_height = row_height * curves.len() as f64 + 10.0;
    let left = WIDTH - MARGIN_RIGHT - box_width - 10.0;
    let top = HEIGHT - MARGIN_BOTTOM - box_height - 10.0;

    writeln!(
        file,
        "<rect x=\"{left}\" y=\"{top}\" width=\"{box_width}\" height=\"{box_height}\" fill=\"white\" stroke=\"#ccc\"/>"
    )?;
    for (i, curve) in curves.iter().enumerate() {
        let y = top + 15.0 + row_height * i as f64;
        write!(
            file,
            "<line x1=\"{:.1}\" y1=\"{y}\" x2=\"{:.1}\" y2=\"{y}\" stroke=\"{}\" stroke-width=\"1.5\"",
            left + 8.0,
            left + 38.0,
            curve.color
        )?;
        if let Some(dash) = curve.dash {
            write!(file, " stroke-dasharray=\"{dash}\"")?;
        }
        writeln!(file, "/>")?;
        writeln!(
            file,
            "<text x=\"{:.1}\" y=\"{:.1}\">{}</text>",
            left + 46.0,
            y + 4.0,
            curve.label
        )?;
    }
    Ok(())
}
