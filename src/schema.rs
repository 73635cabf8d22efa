diesel::table! {
    appointment (id) {
        id -> BigInt,
        patient_name -> Nullable<Text>,
        doctor_name -> Nullable<Text>,
        date -> Nullable<Text>,
    }
}
