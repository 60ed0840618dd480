//! Inline SVG charts and mock sensor data

use rand::Rng;
use rand_distr::StandardNormal;

use super::html::escape;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 260.0;
const PAD: f64 = 24.0;

/// One line of a [`line_chart`]
pub struct Series<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub values: &'a [f64],
}

/// Draw several series on shared axes
pub fn line_chart(series: &[Series<'_>]) -> String {
    let (lo, hi) = bounds(series.iter().flat_map(|s| s.values.iter().copied()));
    let span = (hi - lo).max(f64::EPSILON);

    let lines: String = series
        .iter()
        .map(|s| {
            let step = (WIDTH - 2.0 * PAD) / (s.values.len().saturating_sub(1).max(1)) as f64;
            let points: Vec<String> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = PAD + i as f64 * step;
                    let y = HEIGHT - PAD - (v - lo) / span * (HEIGHT - 2.0 * PAD);
                    format!("{:.1},{:.1}", x, y)
                })
                .collect();
            format!(
                r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
                s.color,
                points.join(" ")
            )
        })
        .collect();

    let legend: String = series
        .iter()
        .map(|s| {
            format!(
                r#"<span style="color:{}; margin-right: 16px;">● {}</span>"#,
                s.color,
                escape(s.name)
            )
        })
        .collect();

    format!(
        r#"<div class="neon-box"><svg viewBox="0 0 {w} {h}" width="100%" xmlns="http://www.w3.org/2000/svg">{lines}</svg><div class="mono" style="font-size: 0.85rem;">{legend}</div></div>"#,
        w = WIDTH,
        h = HEIGHT,
    )
}

/// Vertical bars scaled against `max`, labelled by `labels`
pub fn bar_chart(labels: &[String], values: &[f64], max: f64) -> String {
    let slot = (WIDTH - 2.0 * PAD) / values.len().max(1) as f64;
    let max = max.max(f64::EPSILON);

    let bars: String = values
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (v, label))| {
            let height = v.clamp(0.0, max) / max * (HEIGHT - 2.0 * PAD);
            let x = PAD + i as f64 * slot + slot * 0.1;
            let y = HEIGHT - PAD - height;
            let color = if *v >= 80.0 { "#ef4444" } else { "#22d3ee" };
            format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {:.1}</title></rect>"#,
                x,
                y,
                slot * 0.8,
                height,
                color,
                escape(label),
                v
            )
        })
        .collect();

    format!(
        r#"<div class="neon-box"><svg viewBox="0 0 {w} {h}" width="100%" xmlns="http://www.w3.org/2000/svg">{bars}</svg></div>"#,
        w = WIDTH,
        h = HEIGHT,
    )
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Three-axis vibration feed: `samples` readings per axis, Y offset by +2
pub fn vibration_feed(rng: &mut impl Rng, samples: usize) -> [Vec<f64>; 3] {
    let offsets = [0.0, 2.0, 0.0];
    offsets.map(|offset| {
        (0..samples)
            .map(|_| rng.sample::<f64, _>(StandardNormal) + offset)
            .collect()
    })
}

/// Daily anomaly scores: noise in [0, 50) with a spike at days 25 and 26
pub fn anomaly_scores(rng: &mut impl Rng, days: usize) -> Vec<f64> {
    let mut scores: Vec<f64> = (0..days).map(|_| rng.gen_range(0.0..50.0)).collect();
    if let Some(score) = scores.get_mut(25) {
        *score = 95.0;
    }
    if let Some(score) = scores.get_mut(26) {
        *score = 88.0;
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vibration_feed_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let [x, y, z] = vibration_feed(&mut rng, 50);

        assert_eq!(x.len(), 50);
        assert_eq!(y.len(), 50);
        assert_eq!(z.len(), 50);

        let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
        assert!(mean(&y) > mean(&x));
        assert!(mean(&y) > mean(&z));
    }

    #[test]
    fn test_anomaly_spike() {
        let mut rng = StdRng::seed_from_u64(42);
        let scores = anomaly_scores(&mut rng, 30);

        assert_eq!(scores.len(), 30);
        assert_eq!(scores[25], 95.0);
        assert_eq!(scores[26], 88.0);
        for (i, s) in scores.iter().enumerate() {
            if i != 25 && i != 26 {
                assert!((0.0..50.0).contains(s), "day {} score {}", i, s);
            }
        }
    }

    #[test]
    fn test_charts_render_svg() {
        let values = [1.0, 3.0, 2.0];
        let html = line_chart(&[Series {
            name: "Axis X",
            color: "#22d3ee",
            values: &values,
        }]);
        assert!(html.contains("<polyline"));
        assert!(html.contains("Axis X"));

        let labels = vec!["a".to_string(), "b".to_string()];
        let html = bar_chart(&labels, &[10.0, 95.0], 100.0);
        assert_eq!(html.matches("<rect").count(), 2);
        assert!(html.contains("#ef4444"));
    }
}
