use lazy_static::*;

use crate::big_int_constants::*;
use crate::karatsuba::KaratsubaPolicy;

lazy_static! {
    static ref DEFAULT_POLICY: KaratsubaPolicy = {
        let policy = KaratsubaPolicy::from_env();
        log::debug!(
            "default karatsuba policy: threshold = {}, max_depth = {}",
            policy.threshold, policy.max_depth
        );
        policy
    };
}

/// The process-wide multiplication policy, resolved from the environment on first use.
pub fn default_policy() -> KaratsubaPolicy {
    *DEFAULT_POLICY
}

impl KaratsubaPolicy {
    /// Reads `RADIX_BIGINT_KARATSUBA_THRESHOLD` and `RADIX_BIGINT_KARATSUBA_DEPTH`,
    /// falling back to the compiled-in constants.
    pub fn from_env() -> Self {
        KaratsubaPolicy::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        KaratsubaPolicy {
            threshold: parse_override(&lookup, KARATSUBA_THRESHOLD_ENV, KARATSUBA_THRESHOLD),
            max_depth: parse_override(&lookup, KARATSUBA_DEPTH_ENV, KARATSUBA_DEPTH),
        }
    }
}

fn parse_override<F, T>(lookup: &F, name: &str, fallback: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(name) {
        None => fallback,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("ignoring {} = {:?}, keeping {}", name, raw, fallback);
                fallback
            }
        },
    }
}

#[test]
fn test_from_lookup() {
    let policy = KaratsubaPolicy::from_lookup(|_| None);
    assert_eq!(policy, KaratsubaPolicy::default());

    let policy = KaratsubaPolicy::from_lookup(|name| match name {
        KARATSUBA_THRESHOLD_ENV => Some("4".to_string()),
        KARATSUBA_DEPTH_ENV => Some(" 3 ".to_string()),
        _ => None,
    });
    assert_eq!(policy, KaratsubaPolicy { threshold: 4, max_depth: 3 });

    let policy = KaratsubaPolicy::from_lookup(|name| match name {
        KARATSUBA_DEPTH_ENV => Some("-1".to_string()),
        _ => Some("many".to_string()),
    });
    assert_eq!(policy, KaratsubaPolicy::default());
}
