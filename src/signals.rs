use std::sync::atomic::{AtomicBool, Ordering};

use nix::sys::signal::{self, SigHandler, Signal};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install SIGINT/SIGTERM handlers that raise the interrupt flag.
///
/// The returned flag is polled by the renderer between entries, so a walk
/// stops after the current line instead of being killed mid-write.
pub fn install_interrupt_handler() -> nix::Result<&'static AtomicBool> {
    // SAFETY: the handler only performs an atomic store, which is async-signal-safe.
    unsafe {
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_interrupt))?;
        signal::signal(Signal::SIGTERM, SigHandler::Handler(handle_interrupt))?;
    }

    Ok(&INTERRUPTED)
}

extern "C" fn handle_interrupt(_: i32) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Check whether an interrupt has been received
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
