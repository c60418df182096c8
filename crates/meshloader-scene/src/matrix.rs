use glam::Mat4;

/// Row-major 4x4 matrix as stored by scene importers.
///
/// `a1..a4` is the first row, `d1..d4` the last. Translation lives in `a4`, `b4` and `c4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub a1: f32,
    pub a2: f32,
    pub a3: f32,
    pub a4: f32,
    pub b1: f32,
    pub b2: f32,
    pub b3: f32,
    pub b4: f32,
    pub c1: f32,
    pub c2: f32,
    pub c3: f32,
    pub c4: f32,
    pub d1: f32,
    pub d2: f32,
    pub d3: f32,
    pub d4: f32,
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [a, b, c, d] = rows;
        Self {
            a1: a[0],
            a2: a[1],
            a3: a[2],
            a4: a[3],
            b1: b[0],
            b2: b[1],
            b3: b[2],
            b4: b[3],
            c1: c[0],
            c2: c[1],
            c3: c[2],
            c4: c[3],
            d1: d[0],
            d2: d[1],
            d3: d[2],
            d4: d[3],
        }
    }

    pub fn rows(&self) -> [[f32; 4]; 4] {
        [
            [self.a1, self.a2, self.a3, self.a4],
            [self.b1, self.b2, self.b3, self.b4],
            [self.c1, self.c2, self.c3, self.c4],
            [self.d1, self.d2, self.d3, self.d4],
        ]
    }

    /// Remaps into the engine layout where `dest[i][j]` is component `i` of source row `j`,
    /// each source row becoming a destination column.
    pub fn to_engine_rows(&self) -> [[f32; 4]; 4] {
        let rows = self.rows();
        std::array::from_fn(|i| std::array::from_fn(|j| rows[j][i]))
    }

    /// Mirrors the matrix across the XY plane (`S * M * S` with `S = diag(1, 1, -1, 1)`).
    pub fn mirror_z(&mut self) {
        self.a3 = -self.a3;
        self.b3 = -self.b3;
        self.d3 = -self.d3;
        self.c1 = -self.c1;
        self.c2 = -self.c2;
        self.c4 = -self.c4;
    }
}

impl From<Matrix4x4> for Mat4 {
    fn from(matrix: Matrix4x4) -> Self {
        Mat4::from_cols_array_2d(&matrix.to_engine_rows())
    }
}

impl From<Mat4> for Matrix4x4 {
    fn from(matrix: Mat4) -> Self {
        Matrix4x4::from_rows(matrix.transpose().to_cols_array_2d())
    }
}
