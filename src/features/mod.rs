pub mod arithmetic;
pub mod completion;
pub mod frequency;
