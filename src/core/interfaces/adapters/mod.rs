mod face_recognition_service;

pub use face_recognition_service::FaceRecognitionService;
