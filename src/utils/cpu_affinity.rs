//! CPU pinning for the timed loops.
//!
//! On Linux the thread is pinned through `sched_setaffinity` and the previous
//! mask is restored when the guard is dropped. Other platforms get a guard
//! that does nothing, so timings there are simply unpinned.

#[cfg(target_os = "linux")]
mod platform {
    pub type Mask = libc::cpu_set_t;

    /// Current affinity mask of the calling thread.
    pub fn current_mask() -> Option<Mask> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                Some(set)
            } else {
                None
            }
        }
    }

    /// Core the calling thread is running on right now.
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn pin(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(mask: &Mask) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), mask) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Mask = ();

    pub fn current_mask() -> Option<Mask> {
        None
    }
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }
    pub fn restore(_mask: &Mask) -> bool {
        true
    }
}

/// RAII guard for CPU pinning - pins on creation, restores on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // thread pinned
///     // ... timed loop ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Mask>,
}

impl CpuPinGuard {
    /// Pin the calling thread to the core it is currently running on.
    pub fn new() -> Self {
        let saved = platform::current_mask();
        let pinned_core = match (saved.as_ref(), platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin(core) => Some(core),
            _ => {
                tracing::warn!("cpu pinning unavailable, timings are unpinned");
                None
            }
        };
        Self { pinned_core, saved }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_none() {
            return;
        }
        if let Some(mask) = self.saved.take() {
            if !platform::restore(&mask) {
                tracing::warn!("failed to restore cpu affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
