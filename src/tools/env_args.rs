#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use log::warn;
use std::ops::Deref;
use std::str::FromStr;

// region ArgName
/// One or several names under which an arg can be passed, e.g. `-p` and `--port`.
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}

impl<'a> From<&'a str> for ArgName<'a> {
    fn from(val: &'a str) -> Self {
        ArgName { names: vec![val] }
    }
}

impl<'a> From<Vec<&'a str>> for ArgName<'a> {
    fn from(val: Vec<&'a str>) -> Self {
        ArgName { names: val }
    }
}

impl<'a> Deref for ArgName<'a> {
    type Target = Vec<&'a str>;

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}
// endregion

/// Retrieve the value of an arg passed to the app as `--name=value`.
/// An arg given without any value (`--name=`) counts as missing.
///
/// /!\ As this reads the process args,
/// a function using `retrieve_arg_value` has to be wrapped with `with_env_args(args, fn)` in tests.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    let args: Vec<String> = get_env_args();
    let arg_names = arg_names.into();
    args.iter().find_map(|arg| {
        arg_names.iter().find_map(|arg_name| {
            arg.strip_prefix(arg_name)
                .and_then(|rest| rest.strip_prefix('='))
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        })
    })
}

/// Retrieve an arg value the app can't do without.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

/// Retrieve an arg value and parse it. Unparsable values are logged and ignored.
pub fn retrieve_parsed_arg_value<'a, A, T>(arg_names: A) -> Option<T>
where
    A: Into<ArgName<'a>>,
    T: FromStr,
{
    let value = retrieve_arg_value(arg_names)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring unparsable arg value [value: {value}]");
            None
        }
    }
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while running tests.
    /// Set through `with_env_args`, then reset to their previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

/// Run `function` as if the app had been started with `args`.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
