//! Engine loading and the foreign call.
//!
//! The engine is a platform dynamic library exporting one entry point:
//!
//! ```text
//! start: unsafe extern "C" fn(*mut u8, usize)
//! ```
//!
//! [`render`] encodes the tree, opens the library, resolves `start`,
//! and calls it with the payload address and byte length. The call
//! blocks until the engine gives the process back. There is no retry,
//! no fallback, and no response payload; any failure aborts the render
//! attempt. The library handle closes when it drops, on every exit
//! path.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use numl_markup::Element;

use crate::{wire, EngineError};

/// Environment variable naming the engine library to load.
pub const ENGINE_PATH_VAR: &str = "NUML_ENGINE_PATH";

/// The engine's exported entry point.
type StartFn = unsafe extern "C" fn(*mut u8, usize);

/// Resolve the engine library path from the environment.
///
/// [`ENGINE_PATH_VAR`] wins when set, even to an empty value; otherwise
/// the conventional debug build path is used.
pub fn engine_path() -> PathBuf {
    engine_path_from(env::var_os(ENGINE_PATH_VAR))
}

fn engine_path_from(var: Option<OsString>) -> PathBuf {
    match var {
        Some(path) => PathBuf::from(path),
        None => default_engine_path(),
    }
}

/// Where a freshly built engine lands: the debug artifact of the
/// `engine` crate relative to the working directory, named with the
/// platform's dynamic library prefix and suffix.
fn default_engine_path() -> PathBuf {
    let file = format!(
        "{}numl_engine{}",
        env::consts::DLL_PREFIX,
        env::consts::DLL_SUFFIX
    );
    Path::new("engine").join("target").join("debug").join(file)
}

/// Render a tree with the engine selected by the environment.
pub fn render(element: &Element) -> Result<(), EngineError> {
    render_at(&engine_path(), element)
}

/// Render a tree with the engine library at `path`.
///
/// Blocks until the engine returns control. The payload buffer stays
/// owned on this side of the boundary and outlives the call.
///
/// # Errors
/// [`EngineError::Load`] when the library cannot be opened,
/// [`EngineError::MissingStart`] when it exports no `start` symbol.
pub fn render_at(path: &Path, element: &Element) -> Result<(), EngineError> {
    let mut payload = wire::to_bytes(element)?;
    log::debug!(
        "starting engine {} with a {} byte payload",
        path.display(),
        payload.len()
    );

    // SAFETY: opening a library runs its initializers; the engine is
    // trusted code selected by the caller's path.
    let library = unsafe { Library::new(path) }.map_err(|source| EngineError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    // SAFETY: the engine exports `start` with exactly this signature.
    let start: Symbol<StartFn> =
        unsafe { library.get(b"start\0") }.map_err(|source| EngineError::MissingStart {
            path: path.to_path_buf(),
            source,
        })?;

    // SAFETY: the pointer and length describe a live buffer that is
    // exclusively borrowed for the whole blocking call.
    unsafe { start(payload.as_mut_ptr(), payload.len()) };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numl_markup::{div, Props};

    // =========================================================================
    // Path resolution
    // =========================================================================

    #[test]
    fn test_override_path_wins() {
        let path = engine_path_from(Some(OsString::from("/opt/numl/libengine.so")));
        assert_eq!(path, PathBuf::from("/opt/numl/libengine.so"));
    }

    #[test]
    fn test_unset_var_uses_default() {
        assert_eq!(engine_path_from(None), default_engine_path());
    }

    #[test]
    fn test_default_path_is_the_debug_artifact() {
        let path = default_engine_path();
        assert!(path.starts_with("engine/target/debug"));
        let file = path.file_name().unwrap().to_string_lossy();
        assert!(file.contains("numl_engine"));
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn test_missing_library_is_a_load_error() {
        let tree = div(Props::new()).unwrap();
        let missing = Path::new("does-not-exist/libnuml_engine.so");
        match render_at(missing, &tree) {
            Err(EngineError::Load { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected a load error, got {other:?}"),
        }
    }
}
