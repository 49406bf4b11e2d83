//! Mount bookkeeping for the page scene.
//!
//! Mounting is asynchronous (GPU init awaits the adapter), so `mount` and
//! `unmount` can interleave with an init in flight. Every unmount bumps an
//! epoch; an init holding an older [`MountTicket`] must not install its scene.
//! A `mount` that arrives while an init is running is remembered, so the last
//! call wins once that init settles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket {
    epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountRequest {
    /// Begin a new init with this ticket.
    Start(MountTicket),
    /// An init is already running; the request was recorded.
    Busy,
    /// A scene is already installed.
    Mounted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// The ticket is current: install the scene.
    Install,
    /// Unmounted while initialising and nothing asked for a new mount.
    Discard,
    /// Unmounted and then mounted again while initialising: drop this scene
    /// and start over with the new ticket.
    Restart(MountTicket),
}

#[derive(Clone, Debug, Default)]
pub struct MountGate {
    epoch: u64,
    mounting: bool,
    mounted: bool,
    pending: bool,
}

impl MountGate {
    pub fn request_mount(&mut self) -> MountRequest {
        if self.mounted {
            return MountRequest::Mounted;
        }
        if self.mounting {
            self.pending = true;
            return MountRequest::Busy;
        }
        self.mounting = true;
        self.pending = false;
        MountRequest::Start(self.ticket())
    }

    /// Returns true if a scene was installed.
    pub fn unmount(&mut self) -> bool {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending = false;
        std::mem::replace(&mut self.mounted, false)
    }

    /// An init finished building its scene.
    pub fn finish(&mut self, ticket: MountTicket) -> MountOutcome {
        if ticket.epoch == self.epoch {
            self.mounting = false;
            self.pending = false;
            self.mounted = true;
            return MountOutcome::Install;
        }
        match self.settle_stale() {
            Some(next) => MountOutcome::Restart(next),
            None => MountOutcome::Discard,
        }
    }

    /// An init failed. Returns a ticket when a later mount request is still owed.
    pub fn fail(&mut self, ticket: MountTicket) -> Option<MountTicket> {
        if ticket.epoch == self.epoch {
            self.mounting = false;
            self.pending = false;
            return None;
        }
        self.settle_stale()
    }

    #[inline]
    pub fn is_current(&self, ticket: MountTicket) -> bool {
        ticket.epoch == self.epoch
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn is_mounting(&self) -> bool {
        self.mounting
    }

    fn ticket(&self) -> MountTicket {
        MountTicket { epoch: self.epoch }
    }

    fn settle_stale(&mut self) -> Option<MountTicket> {
        if std::mem::take(&mut self.pending) {
            // Still mounting, now under the current epoch
            Some(self.ticket())
        } else {
            self.mounting = false;
            None
        }
    }
}
