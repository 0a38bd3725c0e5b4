// Singleton demo: lazy process-wide database handle.

use design_patterns::config::PatternKind;
use design_patterns::telemetry::init_tracing;

fn main() -> design_patterns::Result<()> {
    init_tracing(None);
    design_patterns::run_pattern(PatternKind::Singleton)
}
