pub mod ack_deadline;
