mod forward_checking;
mod generalised_arc_consistency;
mod plain_backtracking;
