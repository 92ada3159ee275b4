// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversion. Sizes are entered in centimeters, the scene works in meters.

#[inline]
pub fn cm_to_m(cm: f64) -> f64 {
    cm / 100.0
}

#[inline]
pub fn m_to_cm(m: f64) -> f64 {
    m * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn converts_both_ways() {
        assert_relative_eq!(cm_to_m(250.0), 2.5);
        assert_relative_eq!(m_to_cm(0.45), 45.0, epsilon = 1e-12);
    }
}
