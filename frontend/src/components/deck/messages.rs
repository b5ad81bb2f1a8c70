#[derive(Clone)]
pub enum Msg {
    /// A message for the core deck state machine.
    Deck(common::deck::Msg),
    /// The identity provider signalled a sign-in or sign-out.
    SessionChanged,
}
