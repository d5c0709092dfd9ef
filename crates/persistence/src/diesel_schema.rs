// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    booked_slots (booked_id) {
        booked_id -> BigInt,
        activity -> Text,
        date -> Text,
        start_time -> Text,
        end_time -> Text,
        payer_email -> Text,
        payer_name -> Text,
        amount_paid -> Integer,
        total_amount -> Integer,
        slots_booked -> Integer,
        payment_id -> Text,
        order_id -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    blocked_slots (blocked_id) {
        blocked_id -> BigInt,
        activity -> Text,
        date -> Text,
        start_time -> Text,
        blocked_by -> Text,
        created_at -> Text,
    }
}
