use common::{Axis, Channel, MotionHistory};

/// Points of one axis, x being the position in the history.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub axis: Axis,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            points: Vec::new(),
        }
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything needed to draw the chart for one channel at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    pub tag: String,
    pub channel: Channel,
    /// "<channel title> Data"
    pub title: String,
    /// One series per axis, in X, Y, Z order.
    pub series: [Series; 3],
    /// Projected fields of the most recent sample. None if the history is empty.
    pub readout: Option<[f64; 3]>,
}

impl ChartFrame {
    /// Projects every sample of `history` onto `channel`.
    ///
    /// ```
    /// use chart_rs::ChartFrame;
    /// use common::{Channel, MotionHistory, MotionSample};
    ///
    /// let mut history = MotionHistory::default();
    /// history.push(MotionSample::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]));
    /// let frame = ChartFrame::build(&history, Channel::RotationRate, "Phone");
    /// assert_eq!(frame.title, "RotationRate Data");
    /// assert_eq!(frame.readout, Some([4.0, 5.0, 6.0]));
    /// assert_eq!(frame.series[2].points, vec![(0.0, 6.0)]);
    /// ```
    pub fn build(history: &MotionHistory, channel: Channel, tag: &str) -> Self {
        let mut series = Axis::ALL.map(Series::new);
        for (index, sample) in history.iter().enumerate() {
            let values = channel.project(sample);
            for s in series.iter_mut() {
                s.points.push((index as f64, values[s.axis.index()]));
            }
        }

        Self {
            tag: tag.to_string(),
            channel,
            title: format!("{} Data", channel.title()),
            series,
            readout: history.last().map(|sample| channel.project(sample)),
        }
    }

    pub fn len(&self) -> usize {
        self.series[0].points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `X: v`, `Y: v`, `Z: v`; values are left blank while there is no sample.
    pub fn readout_lines(&self) -> [String; 3] {
        Axis::ALL.map(|axis| match self.readout {
            Some(values) => format!("{}: {:?}", axis.label(), values[axis.index()]),
            None => format!("{}: ", axis.label()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MotionSample;
    use once_cell::sync::Lazy;

    static HISTORY: Lazy<MotionHistory> = Lazy::new(|| {
        let mut history = MotionHistory::default();
        for i in 0..4 {
            let v = i as f64;
            history.push(MotionSample::new(
                [v, v + 0.1, v + 0.2],
                [-v, -v - 0.1, -v - 0.2],
                [v * 10.0, v * 20.0, v * 30.0],
            ));
        }
        history
    });

    #[test]
    fn test_empty_history() {
        let frame = ChartFrame::build(&MotionHistory::default(), Channel::Acceleration, "Test");
        assert!(frame.is_empty());
        assert_eq!(frame.readout, None);
        assert_eq!(frame.readout_lines(), ["X: ", "Y: ", "Z: "]);
        assert_eq!(frame.title, "User Accelerometer Data");
    }

    #[test]
    fn test_series_use_history_index_as_x() {
        let frame = ChartFrame::build(&HISTORY, Channel::Acceleration, "Test");
        assert_eq!(frame.len(), 4);
        for series in &frame.series {
            assert_eq!(series.xs(), vec![0.0, 1.0, 2.0, 3.0]);
        }
        assert_eq!(frame.series[0].axis, Axis::X);
        assert_eq!(frame.series[1].ys(), vec![0.1, 1.1, 2.1, 3.1]);
    }

    #[test]
    fn test_each_channel_projects_its_fields() {
        let rotation = ChartFrame::build(&HISTORY, Channel::RotationRate, "Test");
        assert_eq!(rotation.series[0].ys(), vec![0.0, -1.0, -2.0, -3.0]);
        assert_eq!(rotation.readout, Some([-3.0, -3.1, -3.2]));

        let quaternion = ChartFrame::build(&HISTORY, Channel::Quaternion, "Test");
        assert_eq!(quaternion.series[2].ys(), vec![0.0, 30.0, 60.0, 90.0]);
        assert_eq!(quaternion.title, "Quaternion Data");
    }

    #[test]
    fn test_readout_lines() {
        let frame = ChartFrame::build(&HISTORY, Channel::Quaternion, "Test");
        assert_eq!(frame.readout_lines(), ["X: 30.0", "Y: 60.0", "Z: 90.0"]);
    }
}
