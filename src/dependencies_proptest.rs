//! Property-based tests for the dependency catalog renderings.
//!
//! These tests use proptest to generate random catalogs and verify that the
//! four ecosystem renderings never drift apart.

#[cfg(test)]
mod proptest_tests {
    use crate::dependencies::{
        render, strip_version_constraint, Dependency, DependencyCatalog, Ecosystem,
    };
    use proptest::prelude::*;

    fn dependency_strategy() -> impl Strategy<Value = Dependency> {
        (
            "[a-z][a-z0-9_]{0,11}",
            proptest::option::of("[a-z][a-z0-9-]{0,11}"),
            proptest::option::of("[0-9]{1,3}(\\.[0-9]{1,3}){0,2}"),
        )
            .prop_map(|(name, dpkg_name, minimum_version)| Dependency {
                dpkg_name,
                minimum_version,
                ..Dependency::new(name)
            })
    }

    fn catalog_strategy() -> impl Strategy<Value = DependencyCatalog> {
        proptest::collection::btree_map("[a-z][a-z0-9_]{0,11}", dependency_strategy(), 0..8)
            .prop_map(|entries| {
                let mut catalog = DependencyCatalog::new();
                for (name, dependency) in entries {
                    catalog
                        .insert(Dependency {
                            name,
                            ..dependency
                        })
                        .unwrap();
                }
                catalog
            })
    }

    proptest! {
        /// Property: every rendering lists the same number of entries.
        #[test]
        fn renderings_have_equal_length(catalog in catalog_strategy()) {
            let expected = catalog.len();
            for ecosystem in Ecosystem::ALL {
                prop_assert_eq!(catalog.renderings(ecosystem).len(), expected);
            }
            prop_assert_eq!(catalog.linux_distribution_specs(true).len(), expected);
        }

        /// Property: stripping a dpkg relation yields the dpkg package name.
        #[test]
        fn stripped_dpkg_spec_is_package_name(dependency in dependency_strategy()) {
            let spec = render(&dependency, Ecosystem::Dpkg);
            let expected = dependency
                .dpkg_name
                .clone()
                .unwrap_or_else(|| format!("python-{}", dependency.name));
            prop_assert_eq!(strip_version_constraint(&spec), expected);
        }

        /// Property: the binary distribution name is never versioned.
        #[test]
        fn binary_distribution_name_is_unversioned(dependency in dependency_strategy()) {
            let name = render(&dependency, Ecosystem::BinaryDistribution);
            prop_assert_eq!(name, dependency.name);
        }

        /// Property: a minimum version shows up in every versioned rendering.
        #[test]
        fn minimum_version_reaches_versioned_renderings(dependency in dependency_strategy()) {
            if let Some(version) = dependency.minimum_version.clone() {
                for ecosystem in [Ecosystem::Dpkg, Ecosystem::Pip, Ecosystem::Rpm] {
                    let rendered = render(&dependency, ecosystem);
                    prop_assert!(rendered.contains(&version), "{:?}: {}", ecosystem, rendered);
                }
            }
        }

        /// Property: rendering is deterministic.
        #[test]
        fn render_is_deterministic(dependency in dependency_strategy()) {
            for ecosystem in Ecosystem::ALL {
                prop_assert_eq!(render(&dependency, ecosystem), render(&dependency, ecosystem));
            }
        }
    }
}
