//! Chart primitives: ASCII sparklines and SVG line charts.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::error::VizError;

const SPARK_LEVELS: &[u8] = b" .:-=+*#%@";
const SPARK_MISSING: char = '?';

/// Smallest and largest finite value, or `None` if there is none.
pub fn finite_range(xs: &[f64]) -> Option<(f64, f64)> {
    xs.iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}

/// Scale values into `[0, 1]` using the finite range. Non-finite values map to `NaN`.
pub fn normalize_min_max(xs: &[f64]) -> Vec<f64> {
    let Some((min, max)) = finite_range(xs) else {
        return vec![f64::NAN; xs.len()];
    };
    let range = max - min;
    xs.iter()
        .map(|&x| {
            if !x.is_finite() {
                f64::NAN
            } else if range == 0.0 {
                0.0
            } else {
                (x - min) / range
            }
        })
        .collect()
}

/// ASCII sparkline of `xs` resampled to `width` characters. Missing
/// (non-finite) values show as `?`.
pub fn sparkline_ascii(xs: &[f64], width: usize) -> String {
    if xs.is_empty() || width == 0 {
        return String::new();
    }
    let last = xs.len() - 1;
    let sampled: Vec<f64> = match width {
        1 => vec![xs[last]],
        _ => (0..width).map(|i| xs[i * last / (width - 1)]).collect(),
    };
    normalize_min_max(&sampled)
        .into_iter()
        .map(spark_char)
        .collect()
}

fn spark_char(z: f64) -> char {
    if z.is_nan() {
        return SPARK_MISSING;
    }
    let top = SPARK_LEVELS.len() - 1;
    let level = ((z * top as f64).round() as usize).min(top);
    char::from(SPARK_LEVELS[level])
}

/// Runs of consecutive finite values as `(day, value)` points. A non-finite
/// value ends the current run.
pub fn finite_segments(xs: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (day, &value) in xs.iter().enumerate() {
        if value.is_finite() {
            current.push((day as f64, value));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn value_range(xs: &[f64]) -> (f64, f64) {
    match finite_range(xs) {
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some(range) => range,
        None => (0.0, 1.0),
    }
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    caption: Option<&str>,
    xs: &[f64],
) -> Result<(), VizError> {
    let last_day = xs.len().saturating_sub(1).max(1) as f64;
    let (lo, hi) = value_range(xs);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(5)
        .x_label_area_size(20)
        .y_label_area_size(40);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 14).into_font());
    }
    let mut chart = builder.build_cartesian_2d(0f64..last_day, lo..hi)?;
    chart.configure_mesh().disable_mesh().draw()?;
    for segment in finite_segments(xs) {
        chart.draw_series(LineSeries::new(segment, &BLUE))?;
    }
    Ok(())
}

/// Single line chart of `xs`, days on the x axis.
pub fn line_chart_svg(xs: &[f64], width: u32, height: u32) -> Result<String, VizError> {
    let mut svg = String::new();
    if xs.is_empty() || width == 0 || height == 0 {
        return Ok(svg);
    }
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw_panel(&root, None, xs)?;
        root.present()?;
    }
    Ok(svg)
}

/// One captioned line-chart panel per series, stacked vertically.
pub fn figure_svg<'a, I>(series: I, width: u32, panel_height: u32) -> Result<String, VizError>
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    let series: Vec<(&str, &[f64])> = series.into_iter().collect();
    let mut svg = String::new();
    if series.is_empty() || width == 0 || panel_height == 0 {
        return Ok(svg);
    }
    let height = panel_height * series.len() as u32;
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((series.len(), 1));
        for (&(name, xs), panel) in series.iter().zip(panels.iter()) {
            draw_panel(panel, Some(name), xs)?;
        }
        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ignores_non_finite() {
        assert_eq!(finite_range(&[f64::NAN, 2.0, -1.0, f64::INFINITY]), Some((-1.0, 2.0)));
        assert_eq!(finite_range(&[f64::NAN]), None);
        assert_eq!(finite_range(&[]), None);
    }

    #[test]
    fn normalize_flat_series_is_zero() {
        assert_eq!(normalize_min_max(&[3.0, 3.0]), vec![0.0, 0.0]);
        let n = normalize_min_max(&[0.0, f64::NAN, 4.0]);
        assert_eq!(n[0], 0.0);
        assert!(n[1].is_nan());
        assert_eq!(n[2], 1.0);
    }

    #[test]
    fn sparkline_spans_levels() {
        assert_eq!(sparkline_ascii(&[0.0, 1.0], 2), " @");
        assert_eq!(sparkline_ascii(&[0.0, 1.0, 2.0, 3.0], 4).len(), 4);
        assert_eq!(sparkline_ascii(&[1.0, f64::NAN, 0.0], 3), "@? ");
        assert!(sparkline_ascii(&[], 10).is_empty());
        assert!(sparkline_ascii(&[1.0], 0).is_empty());
    }

    #[test]
    fn segments_break_at_missing_values() {
        assert_eq!(
            finite_segments(&[1.0, 2.0, f64::NAN, f64::INFINITY, 5.0]),
            vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(4.0, 5.0)]]
        );
        assert!(finite_segments(&[f64::NAN]).is_empty());
        assert!(finite_segments(&[]).is_empty());
    }

    #[test]
    fn flat_or_missing_series_get_a_usable_range() {
        assert_eq!(value_range(&[2.0, 2.0]), (1.0, 3.0));
        assert_eq!(value_range(&[f64::NAN]), (0.0, 1.0));
        assert_eq!(value_range(&[0.0, 4.0]), (0.0, 4.0));
    }

    #[test]
    fn line_chart_is_svg_of_requested_size() {
        let svg = line_chart_svg(&[1.0, f64::NAN, 3.0], 100, 50).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"50\""));
        assert!(svg.contains("<polyline"));
        assert!(line_chart_svg(&[], 100, 50).unwrap().is_empty());
        assert!(line_chart_svg(&[1.0], 0, 50).unwrap().is_empty());
    }

    #[test]
    fn figure_has_a_captioned_panel_per_series() {
        let svg = figure_svg([("average", &[1.0, 2.0][..]), ("max", &[][..])], 200, 80).unwrap();
        assert!(svg.contains("average"));
        assert!(svg.contains("max"));
        assert!(svg.contains("height=\"160\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(figure_svg(Vec::<(&str, &[f64])>::new(), 200, 80)
            .unwrap()
            .is_empty());
    }
}
