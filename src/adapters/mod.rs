mod http_face_recognition_service;

pub use http_face_recognition_service::HttpFaceRecognitionService;
