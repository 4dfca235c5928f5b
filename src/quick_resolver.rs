use crate::gm;

pub trait QuickResolver<T> {
    /// Passes the value through, or tells the moderator `msg` when there is
    /// none.
    fn or_announce(self, msg: &str) -> Option<T>;
}

impl<T> QuickResolver<T> for Option<T> {
    fn or_announce(self, msg: &str) -> Option<T> {
        if self.is_none() {
            gm!("{}", msg);
        }
        self
    }
}
