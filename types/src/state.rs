//! Local view state of the dashboard shell.
//!
//! Every action here is UI-only. Nothing touches the mock tables; submit,
//! approve and reject merely raise a toast.

use crate::{Role, Transaction, mock};

pub const PAYOUT_MODAL_SUBMITTED: &str =
    "Pengajuan dikirim. Pastikan detail rekening benar. Tindakan ini tidak dapat dibatalkan.";
pub const PAYOUT_FORM_SUBMITTED: &str = "Pengajuan terkirim";
pub const PAID_INSTANTLY: &str = "Dibayar instan";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub role: Role,
    pub sidebar_open: bool,
    pub auto_capture: bool,
    /// Reference of the transaction shown in the detail drawer.
    pub drawer_tx: Option<&'static str>,
    pub payout_modal_open: bool,
    pub toast: Option<Toast>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Role::default())
    }
}

impl DashboardState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            sidebar_open: true,
            auto_capture: true,
            drawer_tx: None,
            payout_modal_open: false,
            toast: None,
        }
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_auto_capture(&mut self) {
        self.auto_capture = !self.auto_capture;
    }

    pub fn open_transaction(&mut self, reference: &'static str) {
        self.drawer_tx = Some(reference);
    }

    pub fn close_drawer(&mut self) {
        self.drawer_tx = None;
    }

    pub fn drawer_transaction(&self) -> Option<&'static Transaction> {
        self.drawer_tx.and_then(mock::find_transaction)
    }

    pub fn open_payout_modal(&mut self) {
        self.payout_modal_open = true;
    }

    pub fn close_payout_modal(&mut self) {
        self.payout_modal_open = false;
    }

    /// "Kirim" in the payout modal.
    pub fn submit_payout_modal(&mut self) {
        self.payout_modal_open = false;
        self.notify(Toast::success(PAYOUT_MODAL_SUBMITTED));
    }

    /// "Ajukan" in the inline payout form.
    pub fn submit_payout_form(&mut self) {
        self.notify(Toast::success(PAYOUT_FORM_SUBMITTED));
    }

    pub fn pay_instantly(&mut self, payout_id: &str) {
        self.notify(Toast::success(format!("{PAID_INSTANTLY} ({payout_id})")));
    }

    pub fn approve_payout(&mut self, payout_id: &str) {
        self.notify(Toast::success(format!("Pencairan {payout_id} disetujui")));
    }

    pub fn reject_payout(&mut self, payout_id: &str) {
        self.notify(Toast::success(format!("Pencairan {payout_id} ditolak")));
    }

    pub fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::PAYOUTS;

    use super::*;

    #[test]
    fn submitting_payout_modal_closes_it_and_toasts() {
        let before = PAYOUTS;
        let mut state = DashboardState::default();
        state.open_payout_modal();
        assert!(state.payout_modal_open);

        state.submit_payout_modal();

        assert!(!state.payout_modal_open);
        assert_eq!(
            state.toast,
            Some(Toast {
                kind: ToastKind::Success,
                message: PAYOUT_MODAL_SUBMITTED.to_string(),
            })
        );
        assert_eq!(PAYOUTS, before);
    }

    #[test]
    fn cancelling_payout_modal_shows_nothing() {
        let mut state = DashboardState::default();
        state.open_payout_modal();
        state.close_payout_modal();
        assert!(!state.payout_modal_open);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn inline_form_toast() {
        let mut state = DashboardState::default();
        state.submit_payout_form();
        assert_eq!(state.toast.unwrap().message, "Pengajuan terkirim");
    }

    #[test]
    fn payout_actions_only_toast() {
        let mut state = DashboardState::new(Role::Owner);
        state.pay_instantly("#WD-1023");
        assert_eq!(state.toast.as_ref().unwrap().message, "Dibayar instan (#WD-1023)");
        state.reject_payout("#WD-1024");
        assert_eq!(state.toast.as_ref().unwrap().message, "Pencairan #WD-1024 ditolak");
        state.dismiss_toast();
        assert_eq!(state.toast, None);
    }

    #[test]
    fn drawer_follows_selected_transaction() {
        let mut state = DashboardState::default();
        assert!(state.drawer_transaction().is_none());

        state.open_transaction("TRX#D4Q12");
        assert_eq!(state.drawer_transaction().unwrap().buyer, "user****12");

        state.close_drawer();
        assert!(state.drawer_transaction().is_none());
    }

    #[test]
    fn role_switch_keeps_other_state() {
        let mut state = DashboardState::default();
        state.toggle_auto_capture();
        state.set_role(Role::Owner);
        assert_eq!(state.role, Role::Owner);
        assert!(!state.auto_capture);
        assert!(state.sidebar_open);
    }
}
