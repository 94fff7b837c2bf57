//! Nested bar geometry.
//!
//! Positions are relative to the plot origin: x grows right from the left
//! edge, bar heights grow up from the baseline.

/// Fraction of each group's width left empty between groups.
const GROUP_GAP: f32 = 0.2;
/// Fraction of each slot covered by its bar.
const BAR_FILL: f32 = 0.9;
/// Narrowest spacing at which every group label is drawn.
const MIN_LABEL_WIDTH: f32 = 40.0;

/// One bar of the nested chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Outer group index.
    pub group: usize,
    /// Inner member index (legend position).
    pub member: usize,
    pub left: f32,
    pub right: f32,
    pub height: f32,
    pub value: f64,
}

impl BarGeometry {
    pub fn contains_x(&self, x: f32) -> bool {
        (self.left..=self.right).contains(&x)
    }
}

/// Bars plus group label anchors for a plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub bars: Vec<BarGeometry>,
    /// Horizontal centre of each outer group.
    pub group_centers: Vec<f32>,
    /// Draw every n-th group label so labels do not overlap.
    pub label_stride: usize,
}

/// Lay out `groups × members` bars in a `width × height` plot.
///
/// `values` are row-major (group, then member) and scaled against `ceiling`;
/// missing values draw as zero-height bars.
pub fn layout(
    groups: usize,
    members: usize,
    values: &[f64],
    width: f32,
    height: f32,
    ceiling: f64,
) -> ChartLayout {
    if groups == 0 || members == 0 || width <= 0.0 {
        return ChartLayout {
            bars: Vec::new(),
            group_centers: Vec::new(),
            label_stride: 1,
        };
    }

    let group_width = width / groups as f32;
    let gap = group_width * GROUP_GAP;
    let slot = (group_width - gap) / members as f32;
    let bar_width = slot * BAR_FILL;

    let mut bars = Vec::with_capacity(groups * members);
    let mut group_centers = Vec::with_capacity(groups);
    for group in 0..groups {
        let group_left = group as f32 * group_width;
        group_centers.push(group_left + group_width / 2.0);
        for member in 0..members {
            let value = values.get(group * members + member).copied().unwrap_or(0.0);
            let left = group_left + gap / 2.0 + member as f32 * slot + (slot - bar_width) / 2.0;
            bars.push(BarGeometry {
                group,
                member,
                left,
                right: left + bar_width,
                height: scaled(value, ceiling) * height,
                value,
            });
        }
    }

    let label_stride = ((MIN_LABEL_WIDTH / group_width).ceil() as usize).max(1);
    ChartLayout {
        bars,
        group_centers,
        label_stride,
    }
}

/// Evenly spaced tick values from zero to `ceiling`, inclusive.
pub fn ticks(ceiling: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    (0..=count)
        .map(|step| ceiling * step as f64 / count as f64)
        .collect()
}

fn scaled(value: f64, ceiling: f64) -> f32 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    (value / ceiling).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_row_major() {
        let values = [10.0, 5.0, 0.0, 20.0, 10.0, 0.0];
        let chart = layout(2, 3, &values, 200.0, 100.0, 20.0);

        assert_eq!(chart.bars.len(), 6);
        assert_eq!(chart.group_centers, vec![50.0, 150.0]);
        assert_eq!(chart.bars[3].group, 1);
        assert_eq!(chart.bars[3].member, 0);
        assert!((chart.bars[3].height - 100.0).abs() < 1e-4);
        assert!((chart.bars[0].height - 50.0).abs() < 1e-4);
        assert_eq!(chart.bars[2].height, 0.0);
    }

    #[test]
    fn test_bars_stay_inside_their_group() {
        let chart = layout(4, 3, &[1.0; 12], 400.0, 50.0, 1.0);
        for bar in &chart.bars {
            let group_left = bar.group as f32 * 100.0;
            assert!(bar.left >= group_left);
            assert!(bar.right <= group_left + 100.0);
            assert!(bar.right > bar.left);
        }
        for pair in chart.bars.windows(2) {
            if pair[0].group == pair[1].group {
                assert!(pair[0].right <= pair[1].left);
            }
        }
    }

    #[test]
    fn test_label_stride_for_crowded_axis() {
        let chart = layout(38, 3, &[], 380.0, 100.0, 1.0);
        assert_eq!(chart.label_stride, 4);
        assert_eq!(layout(3, 3, &[], 600.0, 100.0, 1.0).label_stride, 1);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(layout(0, 3, &[], 100.0, 100.0, 1.0).bars.is_empty());
        let chart = layout(1, 1, &[5.0], 100.0, 100.0, 0.0);
        assert_eq!(chart.bars[0].height, 0.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(1.0, 4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(ticks(3.0, 0), vec![0.0]);
    }
}
