mod ancestry_path_builder;
mod obligation_aggregator;
mod report_generator;
mod tree_flattener;

pub use ancestry_path_builder::{AncestryPathBuilder, PATH_SEPARATOR};
pub use obligation_aggregator::ObligationAggregator;
pub use report_generator::ReportGenerator;
pub use tree_flattener::ProjectTreeFlattener;
