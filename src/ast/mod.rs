pub mod builders;
pub mod conditions;
pub mod operators;
pub mod order;
pub mod values;

pub use self::conditions::{Condition, Membership, Where};
pub use self::operators::{LogicalOp, Operator, SetOperator};
pub use self::order::{Order, SortDirection};
pub use self::values::{Scalar, ScalarKind};
