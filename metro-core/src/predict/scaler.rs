use crate::Error;

/// Standardizes `N` numeric columns to zero mean and unit variance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler<const N: usize> {
    mean: [f64; N],
    scale: [f64; N],
}

impl<const N: usize> StandardScaler<N> {
    /// Computes column means and population standard deviations.
    /// A constant column is scaled by 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` if there are no rows
    pub fn fit(rows: &[[f64; N]]) -> Result<Self, Error> {
        if rows.is_empty() {
            return Err(Error::InvalidData(
                "Cannot fit a scaler without samples".to_string(),
            ));
        }
        let n = rows.len() as f64;

        let mut mean = [0.0; N];
        for row in rows {
            for (m, value) in mean.iter_mut().zip(row) {
                *m += value;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut scale = [0.0; N];
        for row in rows {
            for ((s, value), m) in scale.iter_mut().zip(row).zip(&mean) {
                *s += (value - m).powi(2);
            }
        }
        for s in &mut scale {
            *s = (*s / n).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Ok(Self { mean, scale })
    }

    pub fn transform(&self, row: [f64; N]) -> [f64; N] {
        let mut scaled = row;
        for ((value, m), s) in scaled.iter_mut().zip(&self.mean).zip(&self.scale) {
            *value = (*value - m) / s;
        }
        scaled
    }

    pub fn mean(&self) -> &[f64; N] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64; N] {
        &self.scale
    }
}
