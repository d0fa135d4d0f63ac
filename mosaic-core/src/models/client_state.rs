use bitflags::bitflags;

bitflags! {
    /// Flags a client carries independently of its mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClientState: u8 {
        const ACCEPTS_FOCUS = 0b001;
        const STICKY = 0b010;
        const URGENT = 0b100;
    }
}
