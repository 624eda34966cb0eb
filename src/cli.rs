use std::ffi::OsStr;

/// What a single invocation does, decided by the first argument only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Version,
    Help,
    Execute,
}

impl Mode {
    /// `args` excludes the program name. Anything past the first argument is ignored,
    /// and a first argument that is not UTF-8 is just another argument.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let Some(first) = args.into_iter().next() else {
            return Self::Execute;
        };

        match first.as_ref().to_str() {
            Some("-V" | "--version") => Self::Version,
            Some("-h" | "--help") => Self::Help,
            _ => Self::Execute,
        }
    }
}
