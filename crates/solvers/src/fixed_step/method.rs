use std::{fmt, str::FromStr};

use odekit_core::Derivative;
use thiserror::Error;

/// The schemes of the Euler family, in order of presentation.
///
/// The order of [`Method::ALL`] is significant: comparisons run and report
/// methods in this order, and the last entry (AIME) serves as the reference
/// when no exact solution is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Method {
    /// Forward Euler.
    Euler,

    /// Improved Euler (Heun's method).
    ImprovedEuler,

    /// Modified Euler (explicit midpoint).
    ModifiedEuler,

    /// Improved Modified Euler, with a nested stage evaluation.
    ImprovedModifiedEuler,

    /// AIME, the reference scheme for comparisons.
    Aime,
}

impl Method {
    /// Every method, in presentation order.
    pub const ALL: [Method; 5] = [
        Method::Euler,
        Method::ImprovedEuler,
        Method::ModifiedEuler,
        Method::ImprovedModifiedEuler,
        Method::Aime,
    ];

    /// The method used as the reference curve when no exact solution is given.
    pub const REFERENCE: Method = Method::Aime;

    /// Returns the selector key for this method, such as `improved_euler`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::ImprovedEuler => "improved_euler",
            Self::ModifiedEuler => "modified_euler",
            Self::ImprovedModifiedEuler => "improved_modified_euler",
            Self::Aime => "aime",
        }
    }

    /// Returns the human-readable name, such as `Improved Euler`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Euler => "Euler",
            Self::ImprovedEuler => "Improved Euler",
            Self::ModifiedEuler => "Modified Euler",
            Self::ImprovedModifiedEuler => "Improved Modified Euler",
            Self::Aime => "AIME",
        }
    }

    /// Returns the number of derivative evaluations per step.
    ///
    /// AIME is counted in its default [`AimeForm::Midpoint`] form.
    #[must_use]
    pub fn stages(self) -> usize {
        Scheme::new(self).stages()
    }

    /// Advances one step from `(x, y)` with step size `h`.
    #[must_use]
    pub fn step<F>(self, f: &F, x: f64, y: f64, h: f64) -> f64
    where
        F: Derivative + ?Sized,
    {
        Scheme::new(self).advance(f, x, y, h)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method: {0:?}")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Parses a selector key (`improved_euler`) or a label (`Improved Euler`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Method::ALL
            .into_iter()
            .find(|method| method.key() == s || method.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMethodError(s.to_owned()))
    }
}

/// The two forms of the AIME update found in circulation.
///
/// The forms differ in how many stages feed the final midpoint evaluation.
/// Neither is declared canonical; [`AimeForm::Midpoint`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AimeForm {
    /// Two stages:
    ///
    /// ```text
    /// k1 = f(x, y)
    /// k2 = f(x + h/2, y + h/2 k1)
    /// y_next = y + h k2
    /// ```
    #[default]
    Midpoint,

    /// Three stages, the second re-evaluated at the left endpoint:
    ///
    /// ```text
    /// k1 = f(x, y)
    /// k2 = f(x, y + h/2 k1)
    /// k3 = f(x + h/2, y + h/2 k2)
    /// y_next = y + h k3
    /// ```
    Nested,
}

/// A method together with the options that pin down its exact update rule.
///
/// Every [`Method`] converts into a `Scheme` with default options, so APIs that
/// accept `impl Into<Scheme>` take a bare method too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scheme {
    method: Method,
    aime: AimeForm,
}

impl Scheme {
    /// Creates a scheme with default options.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            aime: AimeForm::default(),
        }
    }

    /// Selects the AIME form. Has no effect on other methods.
    #[must_use]
    pub fn with_aime_form(self, aime: AimeForm) -> Self {
        Self { aime, ..self }
    }

    /// Returns the method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the AIME form.
    #[must_use]
    pub fn aime_form(&self) -> AimeForm {
        self.aime
    }

    /// Returns the number of derivative evaluations per step.
    #[must_use]
    pub fn stages(&self) -> usize {
        match (self.method, self.aime) {
            (Method::Euler, _) => 1,
            (Method::ImprovedEuler | Method::ModifiedEuler, _)
            | (Method::Aime, AimeForm::Midpoint) => 2,
            (Method::ImprovedModifiedEuler, _) | (Method::Aime, AimeForm::Nested) => 3,
        }
    }

    /// Advances one step from `(x, y)` with step size `h`, returning the next y.
    #[must_use]
    pub fn advance<F>(&self, f: &F, x: f64, y: f64, h: f64) -> f64
    where
        F: Derivative + ?Sized,
    {
        match (self.method, self.aime) {
            (Method::Euler, _) => {
                let k1 = f.eval(x, y);
                y + h * k1
            }
            (Method::ImprovedEuler, _) => {
                let k1 = f.eval(x, y);
                let k2 = f.eval(x + h, y + h * k1);
                y + (h / 2.0) * (k1 + k2)
            }
            (Method::ModifiedEuler, _) => {
                let k1 = f.eval(x, y);
                let y_mid = y + (h / 2.0) * k1;
                let k2 = f.eval(x + h / 2.0, y_mid);
                y + h * k2
            }
            (Method::ImprovedModifiedEuler, _) => {
                let k1 = f.eval(x, y);
                let y_inner = y + h * k1;
                let k2 = f.eval(x + h / 2.0, y + (h / 2.0) * f.eval(x, y_inner));
                y + h * k2
            }
            (Method::Aime, AimeForm::Midpoint) => {
                let k1 = f.eval(x, y);
                let y_half = y + (h / 2.0) * k1;
                let k2 = f.eval(x + h / 2.0, y_half);
                y + h * k2
            }
            (Method::Aime, AimeForm::Nested) => {
                let k1 = f.eval(x, y);
                let k2 = f.eval(x, y + (h / 2.0) * k1);
                let k3 = f.eval(x + h / 2.0, y + (h / 2.0) * k2);
                y + h * k3
            }
        }
    }
}

impl From<Method> for Scheme {
    fn from(method: Method) -> Self {
        Self::new(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for method in Method::ALL {
            assert_eq!(method.key().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("improved euler".parse::<Method>(), Ok(Method::ImprovedEuler));
        assert_eq!("AIME".parse::<Method>(), Ok(Method::Aime));
        assert_eq!(" Modified Euler ".parse::<Method>(), Ok(Method::ModifiedEuler));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "runge_kutta".parse::<Method>(),
            Err(ParseMethodError("runge_kutta".to_owned()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Method::ImprovedModifiedEuler.to_string(), "Improved Modified Euler");
    }

    #[test]
    fn reference_is_last() {
        assert_eq!(Method::ALL.last(), Some(&Method::REFERENCE));
    }

    #[test]
    fn stage_counts() {
        let counts: Vec<_> = Method::ALL.iter().map(|m| m.stages()).collect();
        assert_eq!(counts, vec![1, 2, 2, 3, 2]);

        let nested = Scheme::new(Method::Aime).with_aime_form(AimeForm::Nested);
        assert_eq!(nested.stages(), 3);
    }

    #[test]
    fn aime_form_only_affects_aime() {
        let f = |x: f64, y: f64| x * y + 1.0;
        let plain = Scheme::new(Method::ModifiedEuler);
        let tagged = plain.with_aime_form(AimeForm::Nested);
        assert_eq!(plain.advance(&f, 0.3, 1.2, 0.1), tagged.advance(&f, 0.3, 1.2, 0.1));
    }

    #[test]
    fn method_step_matches_default_scheme() {
        let f = |x: f64, y: f64| x - y;
        for method in Method::ALL {
            assert_eq!(
                method.step(&f, 0.5, 2.0, 0.25),
                Scheme::from(method).advance(&f, 0.5, 2.0, 0.25)
            );
        }
    }
}
