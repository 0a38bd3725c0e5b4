// Decorator demo: espresso with stacked add-ons.

use design_patterns::config::PatternKind;
use design_patterns::telemetry::init_tracing;

fn main() -> design_patterns::Result<()> {
    init_tracing(None);
    design_patterns::run_pattern(PatternKind::Decorator)
}
