mod result_vm;
mod test_vm;

pub use result_vm::ResultVm;
pub use test_vm::TestVm;
