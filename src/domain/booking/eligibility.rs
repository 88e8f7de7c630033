//! Eligibility gate for hotel bookings.
//!
//! A ticket grants lodging only when all of the following hold:
//!
//! | Check               | Failing reason         |
//! |---------------------|------------------------|
//! | a ticket exists     | `NoTicket`             |
//! | type is in-person   | `RemoteAttendance`     |
//! | status is `PAID`    | `TicketNotPaid`        |
//! | type includes hotel | `HotelNotIncluded`     |
//!
//! Checks run in table order and the first failure is reported.

use serde::Serialize;
use std::fmt;

use super::Ticket;

/// Reason a user may not book a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ineligibility {
    NoTicket,
    RemoteAttendance,
    TicketNotPaid,
    HotelNotIncluded,
}

impl Ineligibility {
    pub fn user_message(&self) -> &'static str {
        match self {
            Ineligibility::NoTicket => "No ticket registered for this user",
            Ineligibility::RemoteAttendance => "Remote tickets do not include lodging",
            Ineligibility::TicketNotPaid => "Ticket has not been paid",
            Ineligibility::HotelNotIncluded => "Ticket type does not include hotel",
        }
    }
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Applies the eligibility gate to a user's ticket.
pub fn assess_eligibility(ticket: Option<&Ticket>) -> Result<(), Ineligibility> {
    let ticket = ticket.ok_or(Ineligibility::NoTicket)?;

    if ticket.ticket_type.is_remote {
        return Err(Ineligibility::RemoteAttendance);
    }
    if !ticket.status.is_paid() {
        return Err(Ineligibility::TicketNotPaid);
    }
    if !ticket.ticket_type.includes_hotel {
        return Err(Ineligibility::HotelNotIncluded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{TicketStatus, TicketType};
    use crate::domain::foundation::{TicketId, TicketTypeId, UserId};

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: TicketId::new(1).unwrap(),
            user_id: UserId::new(1).unwrap(),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(1).unwrap(),
                name: "Conference".to_string(),
                is_remote,
                includes_hotel,
            },
        }
    }

    #[test]
    fn paid_in_person_hotel_ticket_is_eligible() {
        let t = ticket(TicketStatus::Paid, false, true);
        assert_eq!(assess_eligibility(Some(&t)), Ok(()));
    }

    #[test]
    fn missing_ticket_is_ineligible() {
        assert_eq!(assess_eligibility(None), Err(Ineligibility::NoTicket));
    }

    #[test]
    fn remote_ticket_is_ineligible() {
        let t = ticket(TicketStatus::Paid, true, true);
        assert_eq!(assess_eligibility(Some(&t)), Err(Ineligibility::RemoteAttendance));
    }

    #[test]
    fn unpaid_ticket_is_ineligible() {
        let t = ticket(TicketStatus::Reserved, false, true);
        assert_eq!(assess_eligibility(Some(&t)), Err(Ineligibility::TicketNotPaid));
    }

    #[test]
    fn ticket_without_hotel_is_ineligible() {
        let t = ticket(TicketStatus::Paid, false, false);
        assert_eq!(assess_eligibility(Some(&t)), Err(Ineligibility::HotelNotIncluded));
    }

    #[test]
    fn remote_reason_wins_over_payment() {
        let t = ticket(TicketStatus::Reserved, true, false);
        assert_eq!(assess_eligibility(Some(&t)), Err(Ineligibility::RemoteAttendance));
    }

    #[test]
    fn every_combination_except_one_is_rejected() {
        for status in [TicketStatus::Reserved, TicketStatus::Paid] {
            for is_remote in [false, true] {
                for includes_hotel in [false, true] {
                    let t = ticket(status, is_remote, includes_hotel);
                    let expected = status.is_paid() && !is_remote && includes_hotel;
                    assert_eq!(assess_eligibility(Some(&t)).is_ok(), expected);
                }
            }
        }
    }
}
