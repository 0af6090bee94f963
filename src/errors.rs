#[derive(Debug, Clone, PartialEq, Fail)]
pub enum Error {
    #[fail(display = "Field `{}` of rectangle is not finite ({}).", _0, _1)]
    NotFinite(&'static str, f32),
    #[fail(display = "Rectangle has negative extent {}x{}.", _0, _1)]
    NegativeExtent(f32, f32),
    #[fail(display = "The identity rectangle is already borrowed on this thread.")]
    IdentityInUse,
}

pub type Result<T> = ::std::result::Result<T, Error>;
