//! Theoretical spectral densities.
//!
//! Only the square case (aspect ratio `c = 1`) of the Marchenko–Pastur law is
//! provided. Other ratios move the support to `[(1 − √c)², (1 + √c)²]`,
//! change the prefactor to `1/(2πcx)`, and add an atom at zero for `c > 1`.

pub mod marchenko_pastur;

pub use marchenko_pastur::{
    marchenko_pastur_moment_c1, marchenko_pastur_pdf_c1, marchenko_pastur_pdf_c1_grid,
    MP_C1_SUPPORT,
};
