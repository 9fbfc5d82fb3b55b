// Copyright 2025 Cowboy AI, LLC.

//! Distance-measure capabilities
//!
//! The two-redshift families take one required redshift and an optional
//! second: `f(z, None)` evaluates between redshift zero and `z`, and
//! `f(z1, Some(z2))` between `z1` and `z2`. A single stable member name per
//! quantity, not a pair of overloads.

use super::core::Cosmology;

/// The cosmology has a scale factor, `a = a0 / (1 + z)`
pub trait ScaleFactor: Cosmology {
    /// Scale factor at z = 0
    fn scale_factor0(&self) -> Self::Array;

    /// Redshift-dependent scale factor
    fn scale_factor(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology has a background (CMB) temperature
pub trait CmbTemperature: Cosmology {
    /// CMB temperature at z = 0, in K
    fn t_cmb0(&self) -> Self::Array;

    /// CMB temperature at redshift `z`, in K
    fn t_cmb(&self, z: Self::Input) -> Self::Array;
}

/// Comoving distance measures
pub trait ComovingDistances: Cosmology {
    /// Comoving line-of-sight distance `d_c` in Mpc
    ///
    /// Remains constant with time for objects in the Hubble flow.
    fn comoving_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;

    /// Redshift at a given comoving line-of-sight distance in Mpc
    fn inv_comoving_distance(&self, dc: Self::Input) -> Self::Array;

    /// Transverse comoving distance `d_M` in Mpc
    ///
    /// The comoving distance corresponding to an angular separation of one
    /// radian; equal to the line-of-sight distance when curvature vanishes.
    fn transverse_comoving_distance(&self, z: Self::Input, z2: Option<Self::Input>)
        -> Self::Array;

    /// Comoving volume `V_c` in Mpc³
    fn comoving_volume(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;

    /// Differential comoving volume in Mpc³ per steradian
    fn differential_comoving_volume(&self, z: Self::Input) -> Self::Array;
}

/// Proper distance and proper time
pub trait ProperDistances: Cosmology {
    /// Proper distance `d` in Mpc, including the effects of expansion
    fn proper_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;

    /// Proper time `t` in Gyr; the proper distance divided by `c`
    fn proper_time(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;
}

/// Lookback distance and lookback time
pub trait LookbackDistances: Cosmology {
    /// Lookback distance in Mpc
    fn lookback_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;

    /// Lookback time in Gyr: how long ago light left an object at `z`
    fn lookback_time(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;
}

/// Age of the universe
pub trait Age: Cosmology {
    /// Age of the universe at redshift `z`, in Gyr
    fn age(&self, z: Self::Input) -> Self::Array;
}

/// Angular diameter distance
pub trait AngularDiameterDistance: Cosmology {
    /// Angular diameter distance `d_A` in Mpc
    ///
    /// The proper transverse distance corresponding to an angle of one
    /// radian at redshift `z`.
    fn angular_diameter_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;
}

/// Luminosity distance
pub trait LuminosityDistance: Cosmology {
    /// Luminosity distance `d_L` in Mpc
    ///
    /// The distance relating bolometric flux to bolometric luminosity.
    fn luminosity_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;
}

/// Union of every distance-measure capability
///
/// Blanket-implemented: any type implementing all constituent traits is a
/// `DistanceMeasures`, with no members of its own — a union of required
/// members only.
pub trait DistanceMeasures:
    ScaleFactor
    + CmbTemperature
    + ComovingDistances
    + ProperDistances
    + LookbackDistances
    + Age
    + AngularDiameterDistance
    + LuminosityDistance
{
}

impl<T> DistanceMeasures for T where
    T: ScaleFactor
        + CmbTemperature
        + ComovingDistances
        + ProperDistances
        + LookbackDistances
        + Age
        + AngularDiameterDistance
        + LuminosityDistance
{
}
