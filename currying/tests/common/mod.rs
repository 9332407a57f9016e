#![allow(dead_code)]

use currying::FunctionObject;
use std::cell::Cell;
use std::rc::Rc;

/// Sets up `env_logger` once per test binary, so `RUST_LOG=trace` shows the dynamic layer's checks.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn add3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

/// Method flavour of [`add3`], with an offset carried by the receiver.
#[derive(Clone, Copy, Debug)]
pub struct Adder {
    pub offset: i32,
}

impl Adder {
    pub fn add2(&self, b: i32, c: i32) -> i32 {
        self.offset + b + c
    }
}

/// Function-object flavour of [`add3`].
#[derive(Clone, Copy, Debug)]
pub struct Add3;

impl FunctionObject for Add3 {
    type Args = (i32, i32, i32);
    type Output = i32;

    fn call(&self, (a, b, c): (i32, i32, i32)) -> i32 {
        add3(a, b, c)
    }
}

/// Shared call counter, to observe how many times a procedure actually ran.
#[derive(Clone, Debug, Default)]
pub struct Calls(Rc<Cell<usize>>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}
