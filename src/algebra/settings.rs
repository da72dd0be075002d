use crate::algebra::{FloatT, SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Treatment of repeated (row, column) positions during coordinate assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Keep every entry.  Repeated positions appear as adjacent entries
    /// in their line, in input order, and each counts towards `nnz`.
    #[default]
    KeepAll,
    /// Merge repeated positions by summing their values
    Sum,
    /// Fail with [`DuplicateEntry`](crate::algebra::SparseMatrixError::DuplicateEntry)
    Reject,
}

/// Settings for assembling compressed matrices from coordinate entries.
///
/// ```
/// use csmat::algebra::*;
///
/// let settings = AssemblySettingsBuilder::<f64>::default()
///     .duplicates(DuplicatePolicy::Sum)
///     .build()
///     .unwrap();
///
/// let entries = [CooEntry::new(0, 1, 1.), CooEntry::new(0, 1, 2.)];
/// let A = CsrMatrix::new_with_settings(1, 2, &entries, &settings).unwrap();
/// assert_eq!(A.get(0, 1), Some(3.));
/// ```

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssemblySettings<T: FloatT> {
    ///treatment of repeated coordinates
    #[builder(default = "DuplicatePolicy::KeepAll")]
    pub duplicates: DuplicatePolicy,

    ///drop entries whose magnitude does not exceed `zero_tolerance`
    #[builder(default = "true")]
    pub drop_zeros: bool,

    ///magnitude at or below which a value counts as zero
    #[builder(default = "T::zero()")]
    pub zero_tolerance: T,
}

impl<T> Default for AssemblySettings<T>
where
    T: FloatT,
{
    fn default() -> AssemblySettings<T> {
        AssemblySettings {
            duplicates: DuplicatePolicy::KeepAll,
            drop_zeros: true,
            zero_tolerance: T::zero(),
        }
    }
}

impl<T> AssemblySettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_zero_tolerance(self.zero_tolerance)
    }

    /// True if `value` should be dropped during assembly
    pub(crate) fn is_dropped(&self, value: T) -> bool {
        self.drop_zeros && value.abs() <= self.zero_tolerance
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for AssemblySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        AssemblySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> AssemblySettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.zero_tolerance {
            validate_zero_tolerance(tol)?;
        }
        Ok(())
    }
}

fn validate_zero_tolerance<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("zero_tolerance"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = AssemblySettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings, AssemblySettings::default());

    // fail on negative or non-finite tolerance
    assert!(AssemblySettingsBuilder::<f64>::default()
        .zero_tolerance(-1.)
        .build()
        .is_err());
    assert!(AssemblySettingsBuilder::<f64>::default()
        .zero_tolerance(f64::NAN)
        .build()
        .is_err());

    // directly construct bad settings and manually check
    let settings = AssemblySettings::<f64> {
        zero_tolerance: f64::INFINITY,
        ..AssemblySettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("zero_tolerance"))
    );
}

#[test]
fn test_settings_is_dropped() {
    let settings = AssemblySettingsBuilder::<f64>::default()
        .zero_tolerance(1e-3)
        .build()
        .unwrap();
    assert!(settings.is_dropped(0.));
    assert!(settings.is_dropped(-1e-4));
    assert!(!settings.is_dropped(1e-2));

    let keep = AssemblySettingsBuilder::<f64>::default()
        .drop_zeros(false)
        .build()
        .unwrap();
    assert!(!keep.is_dropped(0.));
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_serde() {
    let settings = AssemblySettingsBuilder::<f64>::default()
        .duplicates(DuplicatePolicy::Reject)
        .build()
        .unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let back: AssemblySettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, back);

    // missing fields take their defaults
    let partial: AssemblySettings<f64> = serde_json::from_str(r#"{"drop_zeros":false}"#).unwrap();
    assert!(!partial.drop_zeros);
    assert_eq!(partial.duplicates, DuplicatePolicy::KeepAll);
}
