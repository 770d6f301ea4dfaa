use mash_value::{BuiltinVars, Object};

/// Returns the default [`BuiltinVars`] that should be used.
pub fn default_builtin_vars() -> BuiltinVars {
    let mut builtin_vars = BuiltinVars::new();
    builtin_vars.add_native_fn("print", print);
    builtin_vars.add_native_fn("generatePassword", generate_password);
    builtin_vars
}

/// Registry used by [`crate::interpret`]: the defaults plus assertion helpers.
pub fn testing_builtin_vars() -> BuiltinVars {
    let mut builtin_vars = default_builtin_vars();
    builtin_vars.add_native_fn("assert", assert);
    builtin_vars.add_native_fn("assert_eq", assert_eq);
    builtin_vars
}

/// Prints every argument on its own line.
pub fn print(args: &[Object]) -> Object {
    for arg in args {
        println!("{}", arg);
    }

    Object::Null
}

pub fn generate_password(_args: &[Object]) -> Object {
    Object::string("password1234")
}

/// Panics unless every argument is truthy.
pub fn assert(args: &[Object]) -> Object {
    for arg in args {
        assert!(arg.is_truthy(), "assertion failed: {} is not truthy", arg);
    }
    Object::Bool(true)
}

pub fn assert_eq(args: &[Object]) -> Object {
    let null = Object::Null;
    let left = args.get(0).unwrap_or(&null);
    let right = args.get(1).unwrap_or(&null);

    assert_eq!(left, right);
    Object::Bool(true)
}
