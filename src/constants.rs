/// Boltzmann constant in J/K, to the precision of the reference figure.
pub const BOLTZMANN: f64 = 1.38e-23;

/// Avogadro's number, 1/mol.
pub const AVOGADRO: f64 = 6.022e23;

/// Reduced Planck constant in J·s. None of the models need it yet.
pub const PLANCK: f64 = 1.055e-34;

/// Molar gas constant in J/(mol·K), `N_A · k_B`.
pub const GAS_CONSTANT: f64 = AVOGADRO * BOLTZMANN;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gas_constant_is_avogadro_times_boltzmann() {
        assert_relative_eq!(GAS_CONSTANT, 8.31036, max_relative = 1e-12);
    }
}
