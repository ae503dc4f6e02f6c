/// Component of a channel, drawn as one line series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Legend entry
    pub fn caption(&self) -> &'static str {
        match self {
            Axis::X => "X Axis",
            Axis::Y => "Y Axis",
            Axis::Z => "Z Axis",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Axis::X => "red",
            Axis::Y => "green",
            Axis::Z => "blue",
        }
    }
}
