// Factory demo: vehicles chosen by tag, including the unsupported-tag error.

use design_patterns::config::PatternKind;
use design_patterns::telemetry::init_tracing;

fn main() -> design_patterns::Result<()> {
    init_tracing(None);
    design_patterns::run_pattern(PatternKind::Factory)
}
