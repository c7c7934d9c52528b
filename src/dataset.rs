use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{MlErr, Result};

/// Describes the layout of the rows of a `FeatureMatrix`: how many features each row carries
/// and in which column the label lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataDescriptor {
    features: usize,
    label_index: usize,
}

impl DataDescriptor {
    /// Creates a new `DataDescriptor`.
    ///
    /// # Arguments
    /// * `features` - The dimensionality of the feature vectors.
    /// * `label_index` - The column holding the label in every row.
    pub fn new(features: usize, label_index: usize) -> Self {
        Self {
            features,
            label_index,
        }
    }

    /// A descriptor for rows whose label follows the `features` leading columns.
    pub fn trailing_label(features: usize) -> Self {
        Self::new(features, features)
    }

    pub fn features(&self) -> usize {
        self.features
    }

    pub fn label_index(&self) -> usize {
        self.label_index
    }

    /// The width of a labelled row.
    pub fn row_width(&self) -> usize {
        self.features + 1
    }

    /// The column indices holding features, in order, skipping the label column.
    fn feature_columns(&self) -> Vec<usize> {
        (0..self.row_width())
            .filter(|&col| col != self.label_index)
            .collect()
    }
}

/// A dense matrix of rows of identical width.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Array2<f64>,
}

impl FeatureMatrix {
    /// Creates a new `FeatureMatrix` out of a row major buffer.
    ///
    /// # Arguments
    /// * `data` - The values of every row, one after the other.
    /// * `width` - The amount of values per row.
    ///
    /// # Returns
    /// An error if `data` can't be evenly split in rows of `width` values.
    pub fn new(data: Vec<f64>, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(MlErr::InvalidInput("rows must have at least one column"));
        }

        let len = data.len();
        if len % width != 0 {
            return Err(MlErr::SizeMismatch {
                a: "buffer",
                b: "row width",
                got: len,
                expected: (len / width + 1) * width,
            });
        }

        let data = Array2::from_shape_vec((len / width, width), data)
            .map_err(|_| MlErr::InvalidInput("buffer doesn't fit the requested shape"))?;

        Ok(Self { data })
    }

    /// Creates a new `FeatureMatrix` out of a list of rows.
    ///
    /// # Returns
    /// An error if the rows don't all have the width of the first one.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut width = None;
        let mut nrows = 0;
        let mut data = Vec::new();

        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());

            if row.len() != expected {
                return Err(MlErr::SizeMismatch {
                    a: "row",
                    b: "first row",
                    got: row.len(),
                    expected,
                });
            }

            data.extend_from_slice(row);
            nrows = i + 1;
        }

        let width = width.unwrap_or(0);
        let data = Array2::from_shape_vec((nrows, width), data)
            .map_err(|_| MlErr::InvalidInput("rows don't fit a dense matrix"))?;

        Ok(Self { data })
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Returns the columns of this matrix that hold features according to `descriptor`.
    ///
    /// Rows may either carry the label slot, in which case the label column is skipped, or
    /// be made only of features.
    ///
    /// # Returns
    /// An error if the width of the rows matches neither layout. Zero rows always fit.
    pub(crate) fn features(&self, descriptor: &DataDescriptor) -> Result<Array2<f64>> {
        if self.is_empty() {
            return Ok(Array2::zeros((0, descriptor.features())));
        }

        let width = self.ncols();

        if width == descriptor.features() {
            return Ok(self.data.clone());
        }

        check_layout(width, descriptor)?;
        Ok(self.data.select(Axis(1), &descriptor.feature_columns()))
    }
}

impl From<Array2<f64>> for FeatureMatrix {
    fn from(data: Array2<f64>) -> Self {
        Self { data }
    }
}

/// A `FeatureMatrix` validated against its `DataDescriptor` and split in features and labels.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `matrix` - The labelled rows.
    /// * `descriptor` - The layout of the rows.
    ///
    /// # Returns
    /// An error if the matrix is empty, its rows don't have `features + 1` columns, the label
    /// column is out of bounds or any value is not finite.
    pub fn new(matrix: &FeatureMatrix, descriptor: &DataDescriptor) -> Result<Self> {
        if descriptor.features() == 0 {
            return Err(MlErr::InvalidInput("the dimensionality must be at least one"));
        }

        if matrix.is_empty() {
            return Err(MlErr::InvalidInput("the feature matrix is empty"));
        }

        check_layout(matrix.ncols(), descriptor)?;

        if !matrix.data.iter().all(|v| v.is_finite()) {
            return Err(MlErr::InvalidInput("the feature matrix holds non finite values"));
        }

        let x = matrix.data.select(Axis(1), &descriptor.feature_columns());
        let y = matrix.data.column(descriptor.label_index()).to_owned();

        Ok(Self { x, y })
    }

    /// The amount of examples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The dimensionality of the feature vectors.
    pub fn dims(&self) -> usize {
        self.x.ncols()
    }

    /// Iterates over the `(features, label)` pairs in matrix order.
    pub fn examples(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, f64)> {
        self.x.outer_iter().zip(self.y.iter().copied())
    }
}

fn check_layout(width: usize, descriptor: &DataDescriptor) -> Result<()> {
    if width != descriptor.row_width() {
        return Err(MlErr::SizeMismatch {
            a: "row width",
            b: "features plus label",
            got: width,
            expected: descriptor.row_width(),
        });
    }

    if descriptor.label_index() >= width {
        return Err(MlErr::LabelOutOfBounds {
            index: descriptor.label_index(),
            width,
        });
    }

    Ok(())
}
