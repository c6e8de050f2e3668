//! Pairwise cosine similarity between skill and course embeddings

use crate::error::{CourseMatchError, Result};
use ndarray::Array2;

/// Cosine similarity of two equal-length vectors. Zero-norm input gives 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(CourseMatchError::DimensionMismatch(a.len(), b.len()));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

/// Skills × courses similarity matrix.
///
/// Row `i` belongs to `skill_vectors[i]`, column `j` to `course_vectors[j]`.
/// Either side may be empty, producing a matrix with zero rows or columns.
pub fn similarity_matrix(skill_vectors: &[Vec<f32>], course_vectors: &[Vec<f32>]) -> Result<Array2<f32>> {
    let mut matrix = Array2::<f32>::zeros((skill_vectors.len(), course_vectors.len()));

    for (i, skill) in skill_vectors.iter().enumerate() {
        for (j, course) in course_vectors.iter().enumerate() {
            matrix[[i, j]] = cosine_similarity(skill, course)?;
        }
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors_score_one() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_vectors_score_minus_one() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let result = cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]);
        assert!(matches!(result, Err(CourseMatchError::DimensionMismatch(3, 2))));
    }

    #[test]
    fn test_matrix_shape_and_orientation() {
        let skills = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let courses = vec![vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, 2.0]];

        let matrix = similarity_matrix(&skills, &courses).unwrap();

        assert_eq!(matrix.dim(), (2, 3));
        assert!((matrix[[0, 0]] - 1.0).abs() < 1e-6);
        assert!(matrix[[0, 2]].abs() < 1e-6);
        assert!((matrix[[1, 2]] - 1.0).abs() < 1e-6);
        assert!((matrix[[1, 1]] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_matrix_with_no_courses() {
        let matrix = similarity_matrix(&[vec![1.0]], &[]).unwrap();
        assert_eq!(matrix.dim(), (1, 0));
    }

    #[test]
    fn test_matrix_is_deterministic() {
        let skills = vec![vec![0.3, 0.1, 0.7]];
        let courses = vec![vec![0.2, 0.9, 0.4], vec![0.5, 0.5, 0.5]];
        let a = similarity_matrix(&skills, &courses).unwrap();
        let b = similarity_matrix(&skills, &courses).unwrap();
        assert_eq!(a, b);
    }
}
