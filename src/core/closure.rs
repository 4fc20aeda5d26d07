//! Transitive "modules of interest" used for highlighting.

use crate::domain::graph::InterestSet;
use crate::domain::model::ConfigModel;

/// Collect every module name reachable from `seeds` by following resolved
/// dependencies depth-first.
///
/// A name already collected is not expanded again, so dependency cycles
/// terminate. Seeds that match no module are kept but not expanded.
pub fn modules_of_interest<S: AsRef<str>>(model: &ConfigModel, seeds: &[S]) -> InterestSet {
    let mut interest = InterestSet::new();
    for seed in seeds {
        extend_down(model, seed.as_ref(), &mut interest);
    }
    interest
}

fn extend_down(model: &ConfigModel, module_name: &str, interest: &mut InterestSet) {
    if !interest.insert(module_name) {
        tracing::debug!("'{}' already collected, not expanding again", module_name);
        return;
    }

    let Some(module) = model.find_module(module_name, None) else {
        tracing::warn!("⚠️ Module '{}' not found in configuration", module_name);
        return;
    };

    for dep in &module.dependencies {
        match model.find_service(&dep.type_namespace, &dep.r#type, &dep.name) {
            Some(service) => extend_down(model, &service.module_name, interest),
            None => tracing::debug!(
                "Skipping unresolved dependency '{}' of '{}'",
                dep.name,
                module_name
            ),
        }
    }
}
